use thiserror::Error;

/// Errors that can occur when using a [`ParamMap`](crate::ParamMap).
///
/// The variants are deliberately distinguishable: callers are expected to
/// branch on them (an out-of-range index and a missing value usually drive
/// different recovery paths, such as defaulting logic).
///
/// Arity mismatches have no variant here. Constructing a map with the wrong
/// number of names is an array-length mismatch and fails to compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// A run-time index was outside `0..len`.
    #[error("index {index} out of range, expected an index in 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// No parameter matched the given key with a compatible type. Raised when
    /// a name resolves to no slot at all, or when it resolves but the
    /// supplied/requested type differs from the slot's declared type.
    #[error("no parameter matches `{key}` with a compatible type")]
    ArgumentMismatch { key: String },
    /// The resolved slot does not currently hold a value.
    #[error("no value stored for the parameter at index {index}")]
    MissingValue { index: usize },
}
