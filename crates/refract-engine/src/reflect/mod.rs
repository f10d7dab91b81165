//! Constructor reflection
//!
//! This module turns typed constructors and factory functions into uniform,
//! type-erased [`ConstructorWrapper`]s and resolves default-argument bundles
//! supplied at registration time.
//!
//! ## Layers
//!
//! - `param` / `signature`: declared parameters and their normalized form
//! - `accessor` / `invoker`: typed invocation of factories and constructors
//! - `default_args`: bundle detection and suffix matching
//! - `constructor`: the wrappers themselves
//!
//! ## Usage
//!
//! ```ignore
//! let ctor = CtorWrapper::<Point, (f64, f64)>::new(Policy::AsObject);
//! let x = Variant::new(1.0_f64);
//! let y = Variant::new(2.0_f64);
//! let point = ctor.invoke2(Argument::new(&x), Argument::new(&y));
//! assert!(point.is_type::<Point>());
//! ```

mod accessor;
mod constructor;
mod default_args;
mod invoker;
mod param;
mod signature;

pub use accessor::{Callable, MethodAccessor};
pub use constructor::{ConstructorWrapper, CtorWrapper, DefaultedConstructor, FactoryWrapper};
pub use default_args::{
    count_default_args, default_arguments, extract_default_args, find_default_args,
    get_default_args, has_default_args, has_default_types, locate_bundle, resolve_default_args,
    ArgTuple, DefaultArgs, DefaultValue, RegistrationArg,
};
pub use invoker::{Construct, ConstructorInvoker};
pub use param::{Param, ParamList, Ref};
pub use signature::{ParamInfo, Signature};
