use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a local programmer or configuration mistake. None of them is
/// recoverable by retrying; they are returned at the point of failure so the caller can abort
/// the compilation of the affected method instead of continuing with a wrong answer.
///
/// # Error Categories
///
/// ## Signature Errors
/// - [`Error::SignatureTooLong`] - Encoded signature does not fit the configured capacity
/// - [`Error::InvalidTypeName`] - A named type cannot be represented in a signature
///
/// ## Method Errors
/// - [`Error::IndexOutOfRange`] - Parameter query outside of the parameter list
/// - [`Error::EntryPointAlreadySet`] - Second attempt to install compiled code
/// - [`Error::InvalidMethod`] - Incomplete or inconsistent method description
///
/// # Examples
///
/// ```rust
/// use ilmethod::{signature::encode, types::TypeDictionary, Error};
///
/// let types = TypeDictionary::new();
/// let params = vec![types.int64(); 200];
///
/// match encode(&params, &types.no_type()) {
///     Err(Error::SignatureTooLong { length, capacity }) => {
///         assert!(length > capacity);
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The encoded signature would exceed the fixed signature capacity.
    ///
    /// A truncated signature could collide with the signature of another method, so the
    /// encoder refuses to produce one.
    ///
    /// # Fields
    ///
    /// * `length` - Number of characters the full encoding requires
    /// * `capacity` - Maximum number of characters the encoder accepts
    #[error("Signature requires {length} characters, capacity is {capacity}")]
    SignatureTooLong {
        /// Length of the complete encoding
        length: usize,
        /// Configured capacity of the encoder
        capacity: usize,
    },

    /// A parameter was requested by an index outside of the parameter list.
    #[error("Parameter index {index} is out of range, method has {count} parameters")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of parameters of the method
        count: usize,
    },

    /// The entry point of a method was assigned a second time.
    ///
    /// Installing new code without a change of identity would leave identity-keyed caches
    /// pointing at stale code.
    #[error("Entry point of method '{method}' is already set")]
    EntryPointAlreadySet {
        /// Name of the method whose entry point was already installed
        method: String,
    },

    /// The name of an aggregate type cannot be used in a signature.
    ///
    /// Names must be non-empty and free of the signature delimiters `;`, `(` and `)`.
    #[error("Invalid type name '{0}'")]
    InvalidTypeName(String),

    /// A method description is missing a required part or is inconsistent.
    #[error("{0}")]
    InvalidMethod(String),
}
