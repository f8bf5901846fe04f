//! Method flags, entry points and identities of resolved methods.
//!
//! # Key Types
//! - [`MethodAccessFlags`], [`MethodModifiers`]: Attribute flags the capability queries are read from
//! - [`EntryPoint`]: Address of compiled code
//! - [`PersistentIdentifier`]: Identity used for "same method" comparisons and caching

use std::{fmt, num::NonZeroUsize};

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Method access flags
    pub struct MethodAccessFlags: u8 {
        /// Accessible by anyone
        const PUBLIC = 0x01;
        /// Accessible only by the declaring type
        const PRIVATE = 0x02;
        /// Accessible by the declaring type and sub-types
        const PROTECTED = 0x04;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Method modifiers and properties
    pub struct MethodModifiers: u16 {
        /// Defined on the declaring unit, not per instance
        const STATIC = 0x0001;
        /// Method cannot be overridden
        const FINAL = 0x0002;
        /// Method does not provide an implementation
        const ABSTRACT = 0x0004;
        /// Method runs holding the monitor of its receiver
        const SYNCHRONIZED = 0x0008;
        /// Implementation is provided outside of the IL
        const NATIVE = 0x0010;
        /// Method is an object constructor
        const CONSTRUCTOR = 0x0020;
    }
}

/// Address of the compiled code of a method.
///
/// A null address is not an entry point; "no compiled code yet" is expressed as
/// `Option<EntryPoint>::None`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryPoint(NonZeroUsize);

impl EntryPoint {
    /// Creates an entry point from a raw address, `None` for address 0.
    #[must_use]
    pub fn new(address: usize) -> Option<Self> {
        NonZeroUsize::new(address).map(EntryPoint)
    }

    /// Creates an entry point from a code pointer, `None` for a null pointer.
    #[must_use]
    pub fn from_ptr<T>(ptr: *const T) -> Option<Self> {
        Self::new(ptr as usize)
    }

    /// Returns the raw address
    #[must_use]
    pub fn address(&self) -> usize {
        self.0.get()
    }

    /// Returns the address as a byte pointer
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.0.get() as *const u8
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryPoint(0x{:x})", self.0.get())
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0.get())
    }
}

/// Opaque identity of a resolved method.
///
/// Derived from the address of the object that generated the method body. Two resolved
/// methods are the same method exactly when their identifiers are equal; names and
/// signatures play no part in it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersistentIdentifier(usize);

impl PersistentIdentifier {
    pub(crate) fn from_address(address: usize) -> Self {
        PersistentIdentifier(address)
    }

    /// Returns the raw identity value
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for PersistentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersistentIdentifier(0x{:x})", self.0)
    }
}
