//! Type descriptions consumed by the signature encoder and the resolved-method adapter.
//!
//! # Key Components
//!
//! - [`DataType`] - Primitive kinds and the process-wide signature code table
//! - [`IlType`] / [`IlTypeRef`] - Immutable type descriptions and their shared handles
//! - [`TypeDictionary`] - Source of primitive handles and interned named types

mod datatype;
mod dictionary;
mod iltype;

pub use datatype::{DataType, NAME_TERMINATOR, POINTER_PREFIX, SIGNATURE_CODES, UNION_PREFIX};
pub use dictionary::TypeDictionary;
pub use iltype::{IlType, IlTypeKind, IlTypeRef};
