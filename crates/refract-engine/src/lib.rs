//! Refract engine - constructor reflection and registration
//!
//! This crate builds on `refract-sdk` and provides:
//!
//! - **Constructor wrappers**: uniform, type-erased invocation of direct
//!   constructors and factory functions with arity-checked dispatch
//! - **Default arguments**: resolution of a registration-time bundle against
//!   the trailing parameters of a constructor
//! - **Registry**: thread-safe class registration and `create` dispatch
//!
//! # Example
//!
//! ```ignore
//! use refract_engine::{default_arguments, Construct, Registry, Type, Variant};
//!
//! struct Point { x: f64, y: f64 }
//!
//! impl Construct<(f64, f64)> for Point {
//!     fn construct((x, y): (f64, f64)) -> Self { Point { x, y } }
//! }
//!
//! let registry = Registry::new();
//! registry
//!     .class::<Point>("Point")
//!     .constructor::<(f64, f64)>(vec![default_arguments((0.0_f64,)).into()])?;
//!
//! let x = Variant::new(1.0_f64);
//! let point = registry.create(Type::of::<Point>(), &[(&x).into()]);
//! assert!(point.is_type::<Point>());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod reflect;
pub mod registration;

pub use reflect::{
    default_arguments, get_default_args, Callable, Construct, ConstructorWrapper, CtorWrapper,
    DefaultArgs, DefaultedConstructor, FactoryWrapper, Ref, RegistrationArg, Signature,
};
pub use registration::{
    ClassBuilder, ConfigError, MultipleDefaultArgs, RegistrationError, RegistrationResult,
    Registry, RegistryConfig,
};

// Re-export the SDK surface for convenience
pub use refract_sdk::{arguments, Argument, Instance, Policy, Type, Variant};
