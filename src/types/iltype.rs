//! Type descriptions used as parameter and return types of builder-defined methods.
//!
//! An [`IlType`] is immutable once created and shared through [`IlTypeRef`] handles. The
//! constructors validate everything the signature grammar relies on, so any `IlType` that
//! exists can be encoded without ambiguity.

use std::{fmt, sync::Arc};

use crate::{signature::encode_type, types::DataType, Error, Result};

/// A shared handle to an immutable [`IlType`]
pub type IlTypeRef = Arc<IlType>;

/// The shape of an [`IlType`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IlTypeKind {
    /// A primitive value, never [`DataType::Aggregate`]
    Primitive(DataType),
    /// A pointer to another type
    Pointer(IlTypeRef),
    /// A named struct
    Struct(String),
    /// A named union
    Union(String),
}

/// Description of a value type as seen by the IL generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IlType {
    kind: IlTypeKind,
}

impl IlType {
    /// Creates a primitive type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTypeName`] for [`DataType::Aggregate`], which always needs a
    /// name; use [`IlType::structure`] or [`IlType::union`] instead.
    pub fn primitive(data_type: DataType) -> Result<Self> {
        if data_type == DataType::Aggregate {
            return Err(Error::InvalidTypeName(String::new()));
        }

        Ok(IlType {
            kind: IlTypeKind::Primitive(data_type),
        })
    }

    /// Wraps an already validated kind.
    pub(crate) fn from_kind(kind: IlTypeKind) -> Self {
        IlType { kind }
    }

    /// Creates a pointer to `base`.
    #[must_use]
    pub fn pointer(base: IlTypeRef) -> Self {
        IlType {
            kind: IlTypeKind::Pointer(base),
        }
    }

    /// Creates a named struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTypeName`] if the name is empty or contains `;`, `(` or `)`.
    pub fn structure(name: impl Into<String>) -> Result<Self> {
        let name = validate_name(name.into())?;
        Ok(IlType {
            kind: IlTypeKind::Struct(name),
        })
    }

    /// Creates a named union.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTypeName`] if the name is empty or contains `;`, `(` or `)`.
    pub fn union(name: impl Into<String>) -> Result<Self> {
        let name = validate_name(name.into())?;
        Ok(IlType {
            kind: IlTypeKind::Union(name),
        })
    }

    /// Returns the shape of this type.
    #[must_use]
    pub fn kind(&self) -> &IlTypeKind {
        &self.kind
    }

    /// Returns the primitive kind this type is handled as.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        match &self.kind {
            IlTypeKind::Primitive(data_type) => *data_type,
            IlTypeKind::Pointer(_) => DataType::Address,
            IlTypeKind::Struct(_) | IlTypeKind::Union(_) => DataType::Aggregate,
        }
    }

    /// Returns the external name of a struct or union, `None` for other types.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match &self.kind {
            IlTypeKind::Struct(name) | IlTypeKind::Union(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the pointee of a pointer type.
    #[must_use]
    pub fn base_type(&self) -> Option<&IlTypeRef> {
        match &self.kind {
            IlTypeKind::Pointer(base) => Some(base),
            _ => None,
        }
    }

    /// Returns true if this is `NoType`.
    #[must_use]
    pub fn is_no_type(&self) -> bool {
        self.kind == IlTypeKind::Primitive(DataType::NoType)
    }

    /// Returns the signature code of this type alone, e.g. `I` or `PLPoint;`.
    #[must_use]
    pub fn signature_name(&self) -> String {
        let mut buffer = String::new();
        encode_type(self, &mut buffer);
        buffer
    }
}

impl fmt::Display for IlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IlTypeKind::Primitive(data_type) => write!(f, "{data_type}"),
            IlTypeKind::Pointer(base) => write!(f, "{base}*"),
            IlTypeKind::Struct(name) => write!(f, "struct {name}"),
            IlTypeKind::Union(name) => write!(f, "union {name}"),
        }
    }
}

fn validate_name(name: String) -> Result<String> {
    if name.is_empty() || name.contains([';', '(', ')']) {
        return Err(Error::InvalidTypeName(name));
    }

    Ok(name)
}
