//! Refract SDK - runtime type identity and type-erased values
//!
//! This crate provides the small set of types that every other part of
//! refract programs against, without depending on the invocation engine:
//!
//! - [`Type`]: canonical identity of a concrete Rust type
//! - [`Variant`]: type-erased value container, empty on failure
//! - [`Argument`]: borrowed view of one incoming call argument
//! - [`Instance`]: receiver slot of a call (`Instance::none()` for free calls)
//! - [`Policy`]: how a constructed or returned value is stored in a `Variant`
//!
//! # Example
//!
//! ```ignore
//! use refract_sdk::{Argument, Policy, Type, Variant};
//!
//! let value = Variant::new(42_i32);
//! assert!(value.is_type::<i32>());
//!
//! let arg = Argument::from(&value);
//! assert_eq!(arg.get_value::<i32>(), Some(&42));
//!
//! let boxed = Policy::AsBox.wrap(7_u8);
//! assert_eq!(boxed.get_type(), Some(Type::of::<Box<u8>>()));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod argument;
pub mod error;
pub mod instance;
pub mod policy;
pub mod ty;
pub mod variant;

pub use argument::{arguments, Argument};
pub use error::{SdkError, SdkResult};
pub use instance::Instance;
pub use policy::Policy;
pub use ty::Type;
pub use variant::Variant;
