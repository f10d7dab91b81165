//! Error types for the Refract SDK

/// Result type for typed extraction out of a `Variant`
pub type SdkResult<T> = Result<T, SdkError>;

/// Errors raised when a caller asks for a typed value explicitly
///
/// The invocation machinery never surfaces these; it works with empty
/// variants instead. They exist for callers that want a reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// The variant holds no value
    #[error("Variant is empty")]
    Empty,

    /// Type mismatch during extraction
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Requested type name
        expected: String,
        /// Stored type name
        got: String,
    },
}
