//! Parameter declarations
//!
//! A constructor or factory declares its parameters as a tuple of [`Param`]
//! types. Owned `Clone` types are by-value parameters and are copied out of
//! the argument; [`Ref<T>`] is a shared, immutable by-reference parameter
//! that borrows the argument's storage without copying it.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use refract_sdk::{Argument, Type};

use super::signature::ParamInfo;

/// Shared, immutable by-reference parameter.
///
/// Not `Clone`: every owned `Clone` type is already a by-value parameter.
/// Use [`Ref::share`] to duplicate the handle.
pub struct Ref<T>(Arc<T>);

impl<T> Ref<T> {
    /// Wrap a value
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Wrap an already shared value
    pub fn from_arc(value: Arc<T>) -> Self {
        Self(value)
    }

    /// Another handle to the same value
    pub fn share(this: &Self) -> Self {
        Self(Arc::clone(&this.0))
    }

    /// Unwrap into the shared allocation
    pub fn into_arc(this: Self) -> Arc<T> {
        this.0
    }
}

impl<T> Deref for Ref<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ref").field(&*self.0).finish()
    }
}

/// One declared parameter of a constructor or factory
pub trait Param: Sized + 'static {
    /// Whether the parameter is taken by reference
    const IS_REFERENCE: bool;
    /// Whether the referenced value is immutable
    const IS_CONST: bool;

    /// Raw type of the parameter
    fn raw_type() -> Type;

    /// Typed extraction from a call argument; `None` on type mismatch
    fn extract(arg: &Argument<'_>) -> Option<Self>;

    /// Parameter metadata
    fn info() -> ParamInfo {
        ParamInfo {
            ty: Self::raw_type(),
            is_reference: Self::IS_REFERENCE,
            is_const: Self::IS_CONST,
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Param for T {
    const IS_REFERENCE: bool = false;
    const IS_CONST: bool = false;

    fn raw_type() -> Type {
        Type::of::<T>()
    }

    fn extract(arg: &Argument<'_>) -> Option<Self> {
        arg.get_value::<T>().cloned()
    }
}

impl<T: Send + Sync + 'static> Param for Ref<T> {
    const IS_REFERENCE: bool = true;
    const IS_CONST: bool = true;

    fn raw_type() -> Type {
        Type::of::<T>()
    }

    fn extract(arg: &Argument<'_>) -> Option<Self> {
        let variant = arg.variant();
        // `Policy::AsArc` results are accepted as well
        variant
            .shared::<T>()
            .or_else(|| variant.get_value::<Arc<T>>().cloned())
            .map(Ref)
    }
}

/// An ordered list of declared parameters (a tuple of [`Param`]s)
pub trait ParamList: Sized + 'static {
    /// Number of parameters
    const ARITY: usize;

    /// Per-parameter metadata, in declaration order
    fn params() -> Vec<ParamInfo>;

    /// Extract every parameter from `args`.
    ///
    /// Requires exactly `ARITY` arguments of exactly the declared types.
    fn extract(args: &[Argument<'_>]) -> Option<Self>;
}

impl ParamList for () {
    const ARITY: usize = 0;

    fn params() -> Vec<ParamInfo> {
        Vec::new()
    }

    fn extract(args: &[Argument<'_>]) -> Option<Self> {
        args.is_empty().then_some(())
    }
}

macro_rules! impl_param_list {
    ($count:expr; $($name:ident : $idx:tt),+) => {
        impl<$($name: Param),+> ParamList for ($($name,)+) {
            const ARITY: usize = $count;

            fn params() -> Vec<ParamInfo> {
                vec![$($name::info()),+]
            }

            fn extract(args: &[Argument<'_>]) -> Option<Self> {
                if args.len() != $count {
                    return None;
                }
                Some(($($name::extract(&args[$idx])?,)+))
            }
        }
    };
}

impl_param_list!(1; A0: 0);
impl_param_list!(2; A0: 0, A1: 1);
impl_param_list!(3; A0: 0, A1: 1, A2: 2);
impl_param_list!(4; A0: 0, A1: 1, A2: 2, A3: 3);
impl_param_list!(5; A0: 0, A1: 1, A2: 2, A3: 3, A4: 4);
impl_param_list!(6; A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5);
impl_param_list!(7; A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6);
impl_param_list!(8; A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7);
