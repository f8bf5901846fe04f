//! Encoder turning an ordered parameter list and a return type into a [`Signature`].
//!
//! # Grammar
//!
//! ```text
//! Signature ::= '(' Type* ')' Type
//! Type      ::= Code                  primitive, see SIGNATURE_CODES
//!             | 'P' Type              pointer to Type
//!             | 'L' Name ';'          named struct
//!             | 'U' Name ';'          named union
//! ```
//!
//! Every alternative is prefix-free and names cannot contain `;`, `(` or `)`, so two
//! different parameter lists never encode to the same string. The encoder never shortens an
//! encoding that does not fit; it reports [`Error::SignatureTooLong`] instead.

use crate::{
    signature::{Signature, MAX_SIGNATURE_LENGTH},
    types::{DataType, IlType, IlTypeKind, IlTypeRef, NAME_TERMINATOR, POINTER_PREFIX, UNION_PREFIX},
    Error, Result,
};

/// Appends the code of a single type to `buffer`.
///
/// Pointer chains are walked in a loop, their depth is not bounded by the stack.
pub(crate) fn encode_type(il_type: &IlType, buffer: &mut String) {
    let mut current = il_type;
    loop {
        match current.kind() {
            IlTypeKind::Pointer(base) => {
                buffer.push(POINTER_PREFIX);
                current = base;
            }
            IlTypeKind::Primitive(data_type) => {
                buffer.push_str(data_type.signature_code());
                return;
            }
            IlTypeKind::Struct(name) => {
                buffer.push_str(DataType::Aggregate.signature_code());
                buffer.push_str(name);
                buffer.push(NAME_TERMINATOR);
                return;
            }
            IlTypeKind::Union(name) => {
                buffer.push(UNION_PREFIX);
                buffer.push_str(name);
                buffer.push(NAME_TERMINATOR);
                return;
            }
        }
    }
}

/// Encodes method signatures against a fixed capacity.
///
/// The encoder has no state besides its capacity, so the same inputs always produce the same
/// signature.
///
/// # Examples
///
/// ```rust
/// use ilmethod::{signature::SignatureEncoder, types::TypeDictionary};
///
/// let types = TypeDictionary::new();
/// let encoder = SignatureEncoder::default();
///
/// let signature = encoder.encode(&[types.int32(), types.int32()], &types.int32())?;
/// assert_eq!(signature, "(II)I");
/// # Ok::<(), ilmethod::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureEncoder {
    capacity: usize,
}

impl SignatureEncoder {
    /// Creates an encoder accepting signatures of up to `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SignatureEncoder { capacity }
    }

    /// Returns the maximum accepted signature length in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Encodes `parameters` and `return_type` as `(P1P2...Pn)R`.
    ///
    /// # Arguments
    ///
    /// * `parameters` - The parameter types in declaration order
    /// * `return_type` - The return type, `NoType` for methods without a result
    ///
    /// # Errors
    ///
    /// Returns [`Error::SignatureTooLong`] if the complete encoding is longer than the
    /// capacity. The reported length is that of the complete encoding.
    pub fn encode(&self, parameters: &[IlTypeRef], return_type: &IlType) -> Result<Signature> {
        let mut buffer = String::with_capacity(self.capacity.min(MAX_SIGNATURE_LENGTH));

        buffer.push('(');
        for parameter in parameters {
            encode_type(parameter, &mut buffer);
        }
        buffer.push(')');
        encode_type(return_type, &mut buffer);

        if buffer.len() > self.capacity {
            return Err(Error::SignatureTooLong {
                length: buffer.len(),
                capacity: self.capacity,
            });
        }

        Ok(Signature::new(buffer))
    }
}

impl Default for SignatureEncoder {
    fn default() -> Self {
        Self::with_capacity(MAX_SIGNATURE_LENGTH)
    }
}

/// Encodes a signature with the default capacity of [`MAX_SIGNATURE_LENGTH`].
///
/// # Errors
///
/// Returns [`Error::SignatureTooLong`] if the encoding does not fit.
pub fn encode(parameters: &[IlTypeRef], return_type: &IlType) -> Result<Signature> {
    SignatureEncoder::default().encode(parameters, return_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDictionary;

    #[test]
    fn test_encode_int_method() {
        let types = TypeDictionary::new();
        let signature = encode(&[types.int32(), types.int32()], &types.int32()).unwrap();
        assert_eq!(signature, "(II)I");
    }

    #[test]
    fn test_encode_void_method() {
        let types = TypeDictionary::new();
        let signature = encode(&[], &types.no_type()).unwrap();
        assert_eq!(signature, "()V");
    }

    #[test]
    fn test_encode_all_primitives() {
        let types = TypeDictionary::new();
        let parameters = [
            types.boolean(),
            types.int8(),
            types.int16(),
            types.int32(),
            types.int64(),
            types.float(),
            types.double(),
            types.address(),
        ];

        let signature = encode(&parameters, &types.double()).unwrap();
        assert_eq!(signature, "(ZBCIJFDA)D");
    }

    #[test]
    fn test_encode_reference_kinds() {
        let mut types = TypeDictionary::new();
        let point = types.define_struct("Point").unwrap();
        let value = types.define_union("Value").unwrap();
        let int_ptr = types.pointer_to(&types.int32());

        let signature = encode(&[point.clone(), int_ptr, value], &types.pointer_to(&point)).unwrap();
        assert_eq!(signature, "(LPoint;PIUValue;)PLPoint;");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mut types = TypeDictionary::new();
        let node = types.define_struct("Node").unwrap();
        let parameters = [types.int64(), types.pointer_to(&node), types.float()];

        let first = encode(&parameters, &types.int32()).unwrap();
        let second = encode(&parameters, &types.int32()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    }

    #[test]
    fn test_encode_order_matters() {
        let types = TypeDictionary::new();
        let first = encode(&[types.int32(), types.int64()], &types.no_type()).unwrap();
        let second = encode(&[types.int64(), types.int32()], &types.no_type()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_encode_exact_capacity() {
        let types = TypeDictionary::new();
        // "(" + 125 params + ")" + "V" = 128
        let parameters = vec![types.int32(); 125];

        let signature = encode(&parameters, &types.no_type()).unwrap();
        assert_eq!(signature.len(), MAX_SIGNATURE_LENGTH);
    }

    #[test]
    fn test_encode_too_long() {
        let types = TypeDictionary::new();
        // "(" + 127 params + ")" + "V" = 130
        let parameters = vec![types.int32(); 127];

        assert_eq!(
            encode(&parameters, &types.no_type()),
            Err(Error::SignatureTooLong {
                length: 130,
                capacity: MAX_SIGNATURE_LENGTH
            })
        );
    }

    #[test]
    fn test_encode_too_long_by_name() {
        let mut types = TypeDictionary::new();
        let long = types.define_struct(&"N".repeat(200)).unwrap();

        let result = encode(&[long], &types.no_type());
        assert!(matches!(result, Err(Error::SignatureTooLong { length: 205, .. })));
    }

    #[test]
    fn test_encode_deep_pointer_chain() {
        let types = TypeDictionary::new();
        let mut pointer = types.int8();
        for _ in 0..2_000 {
            pointer = types.pointer_to(&pointer);
        }

        // "(" + 2000 * "P" + "B" + ")" + "V"
        assert_eq!(
            encode(&[pointer], &types.no_type()),
            Err(Error::SignatureTooLong {
                length: 2_004,
                capacity: MAX_SIGNATURE_LENGTH
            })
        );
    }

    #[test]
    fn test_custom_capacity() {
        let types = TypeDictionary::new();
        let encoder = SignatureEncoder::with_capacity(4);

        assert_eq!(encoder.capacity(), 4);
        assert!(encoder.encode(&[types.int8()], &types.no_type()).is_ok());
        assert!(encoder
            .encode(&[types.int8(), types.int8()], &types.no_type())
            .is_err());
    }
}
