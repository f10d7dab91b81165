//! Direct construction

use std::marker::PhantomData;

use refract_sdk::{Argument, Policy, Type, Variant};

use super::param::ParamList;

/// A constructor of `Self` taking the declared parameter tuple `Args`.
///
/// ```ignore
/// impl Construct<(f64, f64)> for Point {
///     fn construct((x, y): (f64, f64)) -> Self {
///         Point { x, y }
///     }
/// }
/// ```
pub trait Construct<Args>: Sized {
    /// Build a new value from already extracted arguments
    fn construct(args: Args) -> Self;
}

impl<T: Default> Construct<()> for T {
    fn construct(_args: ()) -> Self {
        T::default()
    }
}

/// Typed construction of `C` from type-erased arguments
pub struct ConstructorInvoker<C, Args> {
    _marker: PhantomData<fn() -> (C, Args)>,
}

impl<C, Args> ConstructorInvoker<C, Args>
where
    C: Construct<Args> + Send + Sync + 'static,
    Args: ParamList,
{
    /// Type of the variant produced under `policy`
    pub fn return_type(policy: Policy) -> Type {
        policy.wrapped_type::<C>()
    }

    /// Extract `Args`, construct a `C` and wrap it under `policy`.
    ///
    /// Empty variant when the arguments do not fit `Args`.
    pub fn invoke(policy: Policy, args: &[Argument<'_>]) -> Variant {
        match Args::extract(args) {
            Some(values) => policy.wrap(C::construct(values)),
            None => Variant::empty(),
        }
    }
}
