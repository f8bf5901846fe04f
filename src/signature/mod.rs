//! Canonical method signatures used for symbol lookup and type matching.
//!
//! A signature lists the codes of all parameter types in parentheses followed by the code of
//! the return type, e.g. `(II)I` for `int32 f(int32, int32)` and `()V` for `void f()`. The
//! grammar is the interchange format with the symbol-matching logic and must not change.
//!
//! # Key Components
//!
//! - [`SignatureEncoder`] - Encodes parameter/return types against a capacity
//! - [`encode`] - Convenience wrapper using [`MAX_SIGNATURE_LENGTH`]
//! - [`Signature`] - The encoded, length-checked result

mod encoder;
mod types;

pub(crate) use encoder::encode_type;
pub use encoder::{encode, SignatureEncoder};
pub use types::{Signature, MAX_SIGNATURE_LENGTH};
