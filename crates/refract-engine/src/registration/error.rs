//! Registration errors

use thiserror::Error;

/// Result type for registration
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Errors that can occur while registering a constructor
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// More than one default-argument bundle was supplied
    #[error("Multiple default argument bundles for a constructor of {class}: found {count}")]
    MultipleDefaultArgs {
        /// Class being registered
        class: String,
        /// Number of bundles found
        count: usize,
    },

    /// The bundle does not cover a trailing run of the parameters
    #[error("Default arguments {bundle} do not match the trailing parameters of {class}{signature}")]
    DefaultArgsMismatch {
        /// Class being registered
        class: String,
        /// Constructor signature
        signature: String,
        /// Rejected bundle
        bundle: String,
    },
}
