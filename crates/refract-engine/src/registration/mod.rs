//! Registration layer
//!
//! Classes are registered with their constructors into a [`Registry`]. The
//! registry resolves default-argument bundles, enforces the configured
//! multiple-bundle policy and dispatches `create` calls.

mod config;
mod error;
mod registry;

pub use config::{ConfigError, MultipleDefaultArgs, RegistryConfig};
pub use error::{RegistrationError, RegistrationResult};
pub use registry::{ClassBuilder, ConstructorEntry, Registry};
