//! # ilmethod Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits.
//! Import it to get quick access to everything needed to describe and query resolved methods.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all ilmethod operations
pub use crate::Error;

/// The result type used throughout ilmethod
pub use crate::Result;

// ================================================================================================
// Type System
// ================================================================================================

/// Type descriptions and their handles
pub use crate::types::{DataType, IlType, IlTypeKind, IlTypeRef, TypeDictionary};

// ================================================================================================
// Signatures
// ================================================================================================

/// Signature encoding
pub use crate::signature::{encode, Signature, SignatureEncoder, MAX_SIGNATURE_LENGTH};

// ================================================================================================
// Resolved Methods
// ================================================================================================

/// The resolution interface and its builder-defined implementation
pub use crate::method::{
    BuilderMethod, EntryPoint, IlInjector, MethodAccessFlags, MethodModifiers,
    PersistentIdentifier, ResolvedMethod, ResolvedMethodBuilder,
};
