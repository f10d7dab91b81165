//! Constructor wrappers
//!
//! Every registered constructor is held as a [`ConstructorWrapper`]: a
//! uniform, type-erased invocable that knows its declaring type, the type it
//! instantiates and its parameter metadata. Two strategies implement it:
//!
//! - [`CtorWrapper`]: direct construction through [`Construct`]
//! - [`FactoryWrapper`]: a stored creator function, called through the
//!   [`MethodAccessor`]
//!
//! [`DefaultedConstructor`] decorates either one with a resolved
//! default-argument bundle so callers may omit trailing arguments.
//!
//! All invoke entry points (fixed arities 0..=6 and the variadic one) route
//! through one arity-checked dispatch. A wrong argument count or a wrong
//! argument type yields the empty variant; nothing panics.

use std::marker::PhantomData;

use refract_sdk::{Argument, Instance, Policy, Type, Variant};

use super::accessor::{Callable, MethodAccessor};
use super::default_args::DefaultArgs;
use super::invoker::{Construct, ConstructorInvoker};
use super::param::ParamList;
use super::signature::Signature;

/// Uniform type-erased constructor
pub trait ConstructorWrapper: Send + Sync {
    /// Raw parameter types
    fn parameter_types(&self) -> Vec<Type>;

    /// Per-parameter reference flags
    fn is_reference(&self) -> Vec<bool>;

    /// Per-parameter const flags
    fn is_const(&self) -> Vec<bool>;

    /// Type of the produced variant
    fn instantiated_type(&self) -> Type;

    /// Class the constructor is registered under
    fn declaring_type(&self) -> Type;

    /// Policy applied to the produced value
    fn policy(&self) -> Policy;

    /// Number of declared parameters
    fn arity(&self) -> usize;

    /// Default-argument bundle, if the constructor carries one
    fn default_args(&self) -> Option<&DefaultArgs> {
        None
    }

    /// Invoke with an ordered argument list of any length
    fn invoke_variadic(&self, args: &[Argument<'_>]) -> Variant;

    /// Invoke with no arguments
    fn invoke(&self) -> Variant {
        self.invoke_variadic(&[])
    }

    /// Invoke with one argument
    fn invoke1(&self, arg1: Argument<'_>) -> Variant {
        self.invoke_variadic(&[arg1])
    }

    /// Invoke with two arguments
    fn invoke2(&self, arg1: Argument<'_>, arg2: Argument<'_>) -> Variant {
        self.invoke_variadic(&[arg1, arg2])
    }

    /// Invoke with three arguments
    fn invoke3(&self, arg1: Argument<'_>, arg2: Argument<'_>, arg3: Argument<'_>) -> Variant {
        self.invoke_variadic(&[arg1, arg2, arg3])
    }

    /// Invoke with four arguments
    fn invoke4(
        &self,
        arg1: Argument<'_>,
        arg2: Argument<'_>,
        arg3: Argument<'_>,
        arg4: Argument<'_>,
    ) -> Variant {
        self.invoke_variadic(&[arg1, arg2, arg3, arg4])
    }

    /// Invoke with five arguments
    fn invoke5(
        &self,
        arg1: Argument<'_>,
        arg2: Argument<'_>,
        arg3: Argument<'_>,
        arg4: Argument<'_>,
        arg5: Argument<'_>,
    ) -> Variant {
        self.invoke_variadic(&[arg1, arg2, arg3, arg4, arg5])
    }

    /// Invoke with six arguments
    fn invoke6(
        &self,
        arg1: Argument<'_>,
        arg2: Argument<'_>,
        arg3: Argument<'_>,
        arg4: Argument<'_>,
        arg5: Argument<'_>,
        arg6: Argument<'_>,
    ) -> Variant {
        self.invoke_variadic(&[arg1, arg2, arg3, arg4, arg5, arg6])
    }
}

fn reject_arity(declaring: Type, expected: usize, got: usize) -> Variant {
    tracing::trace!(class = %declaring, expected, got, "constructor arity mismatch");
    Variant::empty()
}

// ============================================================================
// Direct construction
// ============================================================================

/// Constructor calling `C::construct` with the parameter tuple `Args`
pub struct CtorWrapper<C, Args> {
    policy: Policy,
    signature: Signature,
    _marker: PhantomData<fn() -> (C, Args)>,
}

impl<C, Args> CtorWrapper<C, Args>
where
    C: Construct<Args> + Send + Sync + 'static,
    Args: ParamList,
{
    /// Create the wrapper; metadata is computed once here
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            signature: Signature::of::<Args>(),
            _marker: PhantomData,
        }
    }

    /// Normalized parameter signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl<C, Args> ConstructorWrapper for CtorWrapper<C, Args>
where
    C: Construct<Args> + Send + Sync + 'static,
    Args: ParamList,
{
    fn parameter_types(&self) -> Vec<Type> {
        if Args::ARITY == 0 {
            return Vec::new();
        }
        self.signature.types()
    }

    fn is_reference(&self) -> Vec<bool> {
        if Args::ARITY == 0 {
            return Vec::new();
        }
        self.signature.is_reference()
    }

    fn is_const(&self) -> Vec<bool> {
        if Args::ARITY == 0 {
            return Vec::new();
        }
        self.signature.is_const()
    }

    fn instantiated_type(&self) -> Type {
        ConstructorInvoker::<C, Args>::return_type(self.policy)
    }

    fn declaring_type(&self) -> Type {
        Type::of::<C>()
    }

    fn policy(&self) -> Policy {
        self.policy
    }

    fn arity(&self) -> usize {
        Args::ARITY
    }

    fn invoke_variadic(&self, args: &[Argument<'_>]) -> Variant {
        if args.len() != Args::ARITY {
            return reject_arity(self.declaring_type(), Args::ARITY, args.len());
        }
        ConstructorInvoker::<C, Args>::invoke(self.policy, args)
    }
}

// ============================================================================
// Factory construction
// ============================================================================

/// Constructor delegating to a stored creator function
pub struct FactoryWrapper<C, F, Args> {
    creator: F,
    policy: Policy,
    signature: Signature,
    _marker: PhantomData<fn() -> (C, Args)>,
}

impl<C, F, Args> FactoryWrapper<C, F, Args>
where
    C: 'static,
    F: Callable<Args>,
{
    /// Create the wrapper, taking ownership of `creator`; metadata is
    /// computed once here
    pub fn new(creator: F, policy: Policy) -> Self {
        Self {
            creator,
            policy,
            signature: MethodAccessor::<F, Args>::signature(),
            _marker: PhantomData,
        }
    }

    /// Normalized parameter signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl<C, F, Args> ConstructorWrapper for FactoryWrapper<C, F, Args>
where
    C: 'static,
    F: Callable<Args>,
{
    fn parameter_types(&self) -> Vec<Type> {
        self.signature.types()
    }

    fn is_reference(&self) -> Vec<bool> {
        self.signature.is_reference()
    }

    fn is_const(&self) -> Vec<bool> {
        self.signature.is_const()
    }

    fn instantiated_type(&self) -> Type {
        MethodAccessor::<F, Args>::return_type(self.policy)
    }

    fn declaring_type(&self) -> Type {
        Type::of::<C>()
    }

    fn policy(&self) -> Policy {
        self.policy
    }

    fn arity(&self) -> usize {
        self.signature.len()
    }

    fn invoke_variadic(&self, args: &[Argument<'_>]) -> Variant {
        let arity = self.signature.len();
        if args.len() != arity {
            return reject_arity(self.declaring_type(), arity, args.len());
        }
        MethodAccessor::<F, Args>::invoke(&self.creator, Instance::none(), self.policy, args)
    }
}

// ============================================================================
// Default arguments
// ============================================================================

/// A constructor whose trailing parameters may be omitted.
///
/// With `n` declared parameters and a bundle of `d` defaults, calls with
/// `n - d ..= n` arguments are accepted; the missing trailing arguments are
/// taken from the end of the bundle.
pub struct DefaultedConstructor {
    inner: Box<dyn ConstructorWrapper>,
    defaults: DefaultArgs,
}

impl DefaultedConstructor {
    /// Decorate `inner` with an already resolved bundle
    pub fn new(inner: Box<dyn ConstructorWrapper>, defaults: DefaultArgs) -> Self {
        Self { inner, defaults }
    }

    /// Smallest accepted argument count
    pub fn min_arity(&self) -> usize {
        self.inner.arity().saturating_sub(self.defaults.len())
    }
}

impl ConstructorWrapper for DefaultedConstructor {
    fn parameter_types(&self) -> Vec<Type> {
        self.inner.parameter_types()
    }

    fn is_reference(&self) -> Vec<bool> {
        self.inner.is_reference()
    }

    fn is_const(&self) -> Vec<bool> {
        self.inner.is_const()
    }

    fn instantiated_type(&self) -> Type {
        self.inner.instantiated_type()
    }

    fn declaring_type(&self) -> Type {
        self.inner.declaring_type()
    }

    fn policy(&self) -> Policy {
        self.inner.policy()
    }

    fn arity(&self) -> usize {
        self.inner.arity()
    }

    fn default_args(&self) -> Option<&DefaultArgs> {
        Some(&self.defaults)
    }

    fn invoke_variadic(&self, args: &[Argument<'_>]) -> Variant {
        let arity = self.inner.arity();
        if args.len() == arity {
            return self.inner.invoke_variadic(args);
        }
        if args.len() > arity || args.len() < self.min_arity() {
            return reject_arity(self.declaring_type(), arity, args.len());
        }

        let missing = arity - args.len();
        let mut full = Vec::with_capacity(arity);
        full.extend_from_slice(args);
        for value in self.defaults.tail(missing) {
            full.push(Argument::new(value));
        }
        self.inner.invoke_variadic(&full)
    }
}
