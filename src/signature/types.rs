use std::fmt;

/// Maximum length of an encoded signature in bytes.
///
/// All type codes are ASCII, so for ASCII type names this is also the maximum number of
/// characters.
pub const MAX_SIGNATURE_LENGTH: usize = 128;

/// An encoded method signature of the form `(P1P2...Pn)R`.
///
/// A `Signature` can only be produced by a [`crate::signature::SignatureEncoder`], which
/// guarantees the encoding is complete and within the encoder's capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    pub(crate) fn new(encoded: String) -> Self {
        Signature(encoded)
    }

    /// Returns the encoded signature
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the encoded signature in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, the shortest signature is `()V`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Signature {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Signature {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
