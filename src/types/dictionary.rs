use std::{collections::HashMap, sync::Arc};

use crate::{
    types::{DataType, IlType, IlTypeKind, IlTypeRef},
    Error, Result,
};

/// Hands out shared [`IlTypeRef`] handles to method builders.
///
/// Primitive handles are created once per dictionary. Named structs and unions are interned
/// by name, so the same name always yields the same handle and can never be defined as both
/// a struct and a union, which would make their signatures indistinguishable in intent.
///
/// # Examples
///
/// ```rust
/// use ilmethod::types::TypeDictionary;
///
/// let mut types = TypeDictionary::new();
/// let point = types.define_struct("Point")?;
/// let point_ptr = types.pointer_to(&point);
///
/// assert_eq!(point_ptr.signature_name(), "PLPoint;");
/// # Ok::<(), ilmethod::Error>(())
/// ```
#[derive(Debug)]
pub struct TypeDictionary {
    no_type: IlTypeRef,
    boolean: IlTypeRef,
    int8: IlTypeRef,
    int16: IlTypeRef,
    int32: IlTypeRef,
    int64: IlTypeRef,
    float: IlTypeRef,
    double: IlTypeRef,
    address: IlTypeRef,
    named: HashMap<String, IlTypeRef>,
}

fn primitive(kind: DataType) -> IlTypeRef {
    Arc::new(IlType::from_kind(IlTypeKind::Primitive(kind)))
}

impl TypeDictionary {
    /// Creates a dictionary holding the primitive types and no named types.
    #[must_use]
    pub fn new() -> Self {
        TypeDictionary {
            no_type: primitive(DataType::NoType),
            boolean: primitive(DataType::Boolean),
            int8: primitive(DataType::Int8),
            int16: primitive(DataType::Int16),
            int32: primitive(DataType::Int32),
            int64: primitive(DataType::Int64),
            float: primitive(DataType::Float),
            double: primitive(DataType::Double),
            address: primitive(DataType::Address),
            named: HashMap::new(),
        }
    }

    /// Returns the handle for a primitive kind, `None` for [`DataType::Aggregate`].
    #[must_use]
    pub fn primitive(&self, data_type: DataType) -> Option<IlTypeRef> {
        let handle = match data_type {
            DataType::NoType => &self.no_type,
            DataType::Boolean => &self.boolean,
            DataType::Int8 => &self.int8,
            DataType::Int16 => &self.int16,
            DataType::Int32 => &self.int32,
            DataType::Int64 => &self.int64,
            DataType::Float => &self.float,
            DataType::Double => &self.double,
            DataType::Address => &self.address,
            DataType::Aggregate => return None,
        };
        Some(handle.clone())
    }

    /// `NoType`, the return type of methods without a result
    #[must_use]
    pub fn no_type(&self) -> IlTypeRef {
        self.no_type.clone()
    }

    /// `Boolean`
    #[must_use]
    pub fn boolean(&self) -> IlTypeRef {
        self.boolean.clone()
    }

    /// `Int8`
    #[must_use]
    pub fn int8(&self) -> IlTypeRef {
        self.int8.clone()
    }

    /// `Int16`
    #[must_use]
    pub fn int16(&self) -> IlTypeRef {
        self.int16.clone()
    }

    /// `Int32`
    #[must_use]
    pub fn int32(&self) -> IlTypeRef {
        self.int32.clone()
    }

    /// `Int64`
    #[must_use]
    pub fn int64(&self) -> IlTypeRef {
        self.int64.clone()
    }

    /// `Float`
    #[must_use]
    pub fn float(&self) -> IlTypeRef {
        self.float.clone()
    }

    /// `Double`
    #[must_use]
    pub fn double(&self) -> IlTypeRef {
        self.double.clone()
    }

    /// `Address`
    #[must_use]
    pub fn address(&self) -> IlTypeRef {
        self.address.clone()
    }

    /// Creates a pointer to `base`.
    #[must_use]
    pub fn pointer_to(&self, base: &IlTypeRef) -> IlTypeRef {
        Arc::new(IlType::pointer(base.clone()))
    }

    /// Defines a struct, or returns the existing handle if `name` is already a struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTypeName`] if the name is not a valid type name or is already
    /// defined as a union.
    pub fn define_struct(&mut self, name: &str) -> Result<IlTypeRef> {
        self.define_named(name, IlType::structure)
    }

    /// Defines a union, or returns the existing handle if `name` is already a union.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTypeName`] if the name is not a valid type name or is already
    /// defined as a struct.
    pub fn define_union(&mut self, name: &str) -> Result<IlTypeRef> {
        self.define_named(name, IlType::union)
    }

    /// Looks up a struct or union by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<IlTypeRef> {
        self.named.get(name).cloned()
    }

    fn define_named(
        &mut self,
        name: &str,
        create: fn(String) -> Result<IlType>,
    ) -> Result<IlTypeRef> {
        let candidate = create(name.to_string())?;

        if let Some(existing) = self.named.get(name) {
            if std::mem::discriminant(existing.kind()) != std::mem::discriminant(candidate.kind())
            {
                return Err(Error::InvalidTypeName(name.to_string()));
            }
            return Ok(existing.clone());
        }

        let handle = Arc::new(candidate);
        self.named.insert(name.to_string(), handle.clone());
        Ok(handle)
    }
}

impl Default for TypeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_primitives_are_shared() {
        let types = TypeDictionary::new();
        assert!(Arc::ptr_eq(&types.int32(), &types.int32()));
        assert_eq!(types.double().data_type(), DataType::Double);
        assert!(types.no_type().is_no_type());
    }

    #[test]
    fn test_primitive_lookup() {
        let types = TypeDictionary::new();
        for data_type in DataType::iter() {
            match types.primitive(data_type) {
                Some(handle) => assert_eq!(handle.data_type(), data_type),
                None => assert_eq!(data_type, DataType::Aggregate),
            }
        }
    }

    #[test]
    fn test_named_types_are_interned() {
        let mut types = TypeDictionary::new();
        let first = types.define_struct("Point").unwrap();
        let second = types.define_struct("Point").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &types.lookup("Point").unwrap()));
        assert!(types.lookup("Missing").is_none());
    }

    #[test]
    fn test_struct_union_conflict() {
        let mut types = TypeDictionary::new();
        types.define_struct("Value").unwrap();

        assert_eq!(
            types.define_union("Value"),
            Err(Error::InvalidTypeName("Value".to_string()))
        );
    }

    #[test]
    fn test_invalid_name_is_not_registered() {
        let mut types = TypeDictionary::new();
        assert!(types.define_struct("bad;name").is_err());
        assert!(types.lookup("bad;name").is_none());
    }
}
