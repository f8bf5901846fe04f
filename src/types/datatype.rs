use std::fmt;

use strum::{EnumCount, EnumIter};

/// Primitive data kinds a compiler front end reasons about.
///
/// Every [`crate::types::IlType`] maps onto exactly one `DataType`; pointers collapse to
/// [`DataType::Address`] and named structs or unions to [`DataType::Aggregate`].
///
/// The discriminants index the process-wide [`SIGNATURE_CODES`] table and must stay dense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
#[repr(u8)]
pub enum DataType {
    /// No value, only meaningful as a return type
    NoType = 0,
    /// Boolean
    Boolean = 1,
    /// 8-bit integer
    Int8 = 2,
    /// 16-bit integer
    Int16 = 3,
    /// 32-bit integer
    Int32 = 4,
    /// 64-bit integer
    Int64 = 5,
    /// 32-bit floating point
    Float = 6,
    /// 64-bit floating point
    Double = 7,
    /// Untyped address or reference
    Address = 8,
    /// Named struct or union, passed by reference
    Aggregate = 9,
}

/// One signature code per [`DataType`], indexed by discriminant.
///
/// `Aggregate` is only the prefix of the named struct form `L<name>;`; the encoder appends the
/// name and the terminator. Unions use [`UNION_PREFIX`] instead.
pub static SIGNATURE_CODES: [&str; DataType::COUNT] = [
    "V", // NoType
    "Z", // Boolean
    "B", // Int8
    "C", // Int16
    "I", // Int32
    "J", // Int64
    "F", // Float
    "D", // Double
    "A", // Address
    "L", // Aggregate
];

/// Signature prefix of a pointer, followed by the code of the pointee.
pub const POINTER_PREFIX: char = 'P';
/// Signature prefix of the named union form `U<name>;`.
pub const UNION_PREFIX: char = 'U';
/// Terminator of the named form `L<name>;`.
pub const NAME_TERMINATOR: char = ';';

impl DataType {
    /// Returns the signature code of this data type.
    #[must_use]
    pub fn signature_code(self) -> &'static str {
        SIGNATURE_CODES[self as usize]
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::NoType => "NoType",
            DataType::Boolean => "Boolean",
            DataType::Int8 => "Int8",
            DataType::Int16 => "Int16",
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::Float => "Float",
            DataType::Double => "Double",
            DataType::Address => "Address",
            DataType::Aggregate => "Aggregate",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_discriminants_are_dense() {
        for (index, data_type) in DataType::iter().enumerate() {
            assert_eq!(data_type as usize, index);
        }
        assert_eq!(DataType::iter().count(), SIGNATURE_CODES.len());
    }

    #[test]
    fn test_signature_codes_are_unique() {
        let codes: HashSet<&str> = DataType::iter().map(DataType::signature_code).collect();
        assert_eq!(codes.len(), DataType::COUNT);
        assert!(!codes.contains(POINTER_PREFIX.to_string().as_str()));
        assert!(!codes.contains(UNION_PREFIX.to_string().as_str()));
    }

    #[test]
    fn test_signature_codes() {
        assert_eq!(DataType::NoType.signature_code(), "V");
        assert_eq!(DataType::Int32.signature_code(), "I");
        assert_eq!(DataType::Int64.signature_code(), "J");
        assert_eq!(DataType::Double.signature_code(), "D");
        assert_eq!(DataType::Address.signature_code(), "A");
    }
}
