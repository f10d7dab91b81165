//! Method accessor
//!
//! Generic invocation of plain functions and closures through type-erased
//! arguments. The factory constructor wrapper delegates both its metadata and
//! its dispatch here.

use std::marker::PhantomData;

use refract_sdk::{Argument, Instance, Policy, Type, Variant};

use super::param::{Param, ParamList};
use super::signature::Signature;

/// A function callable with a declared parameter tuple `Args`.
///
/// Implemented for every `Fn(A0, .., An) -> R` (n up to 8) whose parameters
/// are [`Param`]s. `Args` only disambiguates the implementations and is
/// inferred from the function's own signature.
pub trait Callable<Args>: Send + Sync + 'static {
    /// Return type
    type Output: Send + Sync + 'static;

    /// Normalized parameter signature
    fn signature() -> Signature;

    /// Call with type-erased arguments; `None` on arity or type mismatch
    fn call(&self, args: &[Argument<'_>]) -> Option<Self::Output>;
}

macro_rules! impl_callable {
    ($($name:ident),*) => {
        impl<Func, Ret, $($name: Param),*> Callable<($($name,)*)> for Func
        where
            Func: Fn($($name),*) -> Ret + Send + Sync + 'static,
            Ret: Send + Sync + 'static,
        {
            type Output = Ret;

            fn signature() -> Signature {
                Signature::of::<($($name,)*)>()
            }

            #[allow(non_snake_case)]
            fn call(&self, args: &[Argument<'_>]) -> Option<Ret> {
                let ($($name,)*) = <($($name,)*) as ParamList>::extract(args)?;
                Some(self($($name),*))
            }
        }
    };
}

impl_callable!();
impl_callable!(A0);
impl_callable!(A0, A1);
impl_callable!(A0, A1, A2);
impl_callable!(A0, A1, A2, A3);
impl_callable!(A0, A1, A2, A3, A4);
impl_callable!(A0, A1, A2, A3, A4, A5);
impl_callable!(A0, A1, A2, A3, A4, A5, A6);
impl_callable!(A0, A1, A2, A3, A4, A5, A6, A7);

/// Metadata queries and invocation for a callable `F`
pub struct MethodAccessor<F, Args> {
    _marker: PhantomData<fn() -> (F, Args)>,
}

impl<F: Callable<Args>, Args> MethodAccessor<F, Args> {
    /// Normalized parameter signature
    pub fn signature() -> Signature {
        F::signature()
    }

    /// Raw parameter types
    pub fn parameter_types() -> Vec<Type> {
        F::signature().types()
    }

    /// Per-parameter reference flags
    pub fn is_reference() -> Vec<bool> {
        F::signature().is_reference()
    }

    /// Per-parameter const flags
    pub fn is_const() -> Vec<bool> {
        F::signature().is_const()
    }

    /// Type of the variant produced under `policy`
    pub fn return_type(policy: Policy) -> Type {
        policy.wrapped_type::<F::Output>()
    }

    /// Invoke `func` and wrap its result under `policy`.
    ///
    /// Free functions have no receiver: `instance` must be
    /// [`Instance::none`]. Returns the empty variant when an instance is bound
    /// or the arguments do not fit the signature.
    pub fn invoke(
        func: &F,
        instance: Instance<'_>,
        policy: Policy,
        args: &[Argument<'_>],
    ) -> Variant {
        if instance.target().is_some() {
            return Variant::empty();
        }
        match func.call(args) {
            Some(value) => policy.wrap(value),
            None => Variant::empty(),
        }
    }
}
