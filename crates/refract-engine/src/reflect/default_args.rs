//! Default-argument resolution
//!
//! A registration call receives an ordered list of [`RegistrationArg`]s. At
//! most one of them is meant to be a [`DefaultArgs`] bundle: stored values
//! for a trailing run of the target signature's parameters.
//!
//! A bundle is usable for a signature only if its element types equal,
//! component-wise, the raw types of some suffix of that signature. Suffixes
//! are tried from the full signature inward, so a bundle `(i32, f64)` fits
//! `(bool, i32, f64)` while a bundle `(i32)` does not: defaults always end at
//! the rightmost parameter.
//!
//! ```text
//! signature (bool, i32, f64) + bundle (bool, i32, f64) => bundle
//! signature (bool, i32, f64) + bundle (i32, f64)       => bundle
//! signature (bool, i32, f64) + bundle (f64)            => bundle
//! signature (bool, i32, f64) + bundle (i32)            => no defaults
//! ```
//!
//! Failing to resolve is not an error: callers get the empty bundle.

use std::fmt;

use refract_sdk::{Type, Variant};

use super::param::{Param, Ref};
use super::signature::Signature;

/// Stored default values for the trailing parameters of a signature
#[derive(Debug, Clone, Default)]
pub struct DefaultArgs {
    types: Vec<Type>,
    values: Vec<Variant>,
}

impl DefaultArgs {
    /// Bundle the values of a tuple
    pub fn new<T: ArgTuple>(values: T) -> Self {
        let (types, values) = values.into_parts();
        Self { types, values }
    }

    /// The bundle with no stored values
    pub const fn empty() -> Self {
        Self {
            types: Vec::new(),
            values: Vec::new(),
        }
    }

    /// A bundle of the given shape whose slots hold no value
    pub fn unset(shape: &[Type]) -> Self {
        Self {
            types: shape.to_vec(),
            values: vec![Variant::empty(); shape.len()],
        }
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the bundle stores nothing
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element types, which identify the kind of bundle
    pub fn shape(&self) -> &[Type] {
        &self.types
    }

    /// Stored values in parameter order
    pub fn values(&self) -> &[Variant] {
        &self.values
    }

    /// Stored value at `index`
    pub fn get(&self, index: usize) -> Option<&Variant> {
        self.values.get(index)
    }

    /// The last `count` stored values (all of them if `count` exceeds the length)
    pub fn tail(&self, count: usize) -> &[Variant] {
        &self.values[self.values.len().saturating_sub(count)..]
    }
}

impl fmt::Display for DefaultArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("default_args<")?;
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty.name())?;
        }
        f.write_str(">")
    }
}

/// Build a default-argument bundle from a tuple of values
pub fn default_arguments<T: ArgTuple>(values: T) -> DefaultArgs {
    DefaultArgs::new(values)
}

/// One stored default value.
///
/// The recorded type is the parameter's raw type: a `Ref<T>` default is
/// stored as the shared `T` and matches a `T` or `Ref<T>` parameter.
pub trait DefaultValue: Param {
    /// Erase into a variant holding the raw type
    fn into_variant(self) -> Variant;
}

impl<T: Clone + Send + Sync + 'static> DefaultValue for T {
    fn into_variant(self) -> Variant {
        Variant::new(self)
    }
}

impl<T: Send + Sync + 'static> DefaultValue for Ref<T> {
    fn into_variant(self) -> Variant {
        Variant::from_arc(Ref::into_arc(self))
    }
}

/// A tuple of values that can become a [`DefaultArgs`] bundle
pub trait ArgTuple {
    /// Split into raw element types and erased values
    fn into_parts(self) -> (Vec<Type>, Vec<Variant>);
}

macro_rules! impl_arg_tuple {
    ($($name:ident),+) => {
        impl<$($name: DefaultValue),+> ArgTuple for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_parts(self) -> (Vec<Type>, Vec<Variant>) {
                let ($($name,)+) = self;
                (
                    vec![$(<$name as Param>::raw_type()),+],
                    vec![$($name.into_variant()),+],
                )
            }
        }
    };
}

impl_arg_tuple!(A0);
impl_arg_tuple!(A0, A1);
impl_arg_tuple!(A0, A1, A2);
impl_arg_tuple!(A0, A1, A2, A3);
impl_arg_tuple!(A0, A1, A2, A3, A4);
impl_arg_tuple!(A0, A1, A2, A3, A4, A5);
impl_arg_tuple!(A0, A1, A2, A3, A4, A5, A6);
impl_arg_tuple!(A0, A1, A2, A3, A4, A5, A6, A7);

/// One element of a registration argument list
#[derive(Debug, Clone)]
pub enum RegistrationArg {
    /// A plain value
    Value(Variant),
    /// A named metadata entry
    Metadata {
        /// Metadata key
        key: String,
        /// Metadata value
        value: Variant,
    },
    /// A default-argument bundle
    Defaults(DefaultArgs),
}

impl RegistrationArg {
    /// Build a metadata entry
    pub fn metadata(key: impl Into<String>, value: Variant) -> Self {
        RegistrationArg::Metadata {
            key: key.into(),
            value,
        }
    }

    /// The bundle, if this element is one
    pub fn as_defaults(&self) -> Option<&DefaultArgs> {
        match self {
            RegistrationArg::Defaults(bundle) => Some(bundle),
            _ => None,
        }
    }

    /// Check whether this element is a default-argument bundle
    pub fn is_defaults(&self) -> bool {
        matches!(self, RegistrationArg::Defaults(_))
    }
}

impl From<DefaultArgs> for RegistrationArg {
    fn from(bundle: DefaultArgs) -> Self {
        RegistrationArg::Defaults(bundle)
    }
}

impl From<Variant> for RegistrationArg {
    fn from(value: Variant) -> Self {
        RegistrationArg::Value(value)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// The first default-argument bundle in `args`
pub fn locate_bundle(args: &[RegistrationArg]) -> Option<&DefaultArgs> {
    args.iter().find_map(RegistrationArg::as_defaults)
}

/// Number of default-argument bundles in `args`
pub fn count_default_args(args: &[RegistrationArg]) -> usize {
    args.iter().filter(|arg| arg.is_defaults()).count()
}

/// Check whether `args` contains a default-argument bundle
pub fn has_default_args(args: &[RegistrationArg]) -> bool {
    locate_bundle(args).is_some()
}

/// Find the suffix of `signature` whose raw types equal `shape`.
///
/// Tries start indices `0..len` in order and returns the first match. An
/// empty shape never matches.
pub fn find_default_args(signature: &Signature, shape: &[Type]) -> Option<usize> {
    if shape.is_empty() {
        return None;
    }
    (0..signature.len()).find(|&start| signature.suffix_matches(start, shape))
}

/// Shape of the bundle in `args` usable for `signature`, if any
pub fn resolve_default_args(signature: &Signature, args: &[RegistrationArg]) -> Option<Vec<Type>> {
    let bundle = locate_bundle(args)?;
    find_default_args(signature, bundle.shape()).map(|_| bundle.shape().to_vec())
}

/// Check whether `args` holds a bundle usable for `signature`
pub fn has_default_types(signature: &Signature, args: &[RegistrationArg]) -> bool {
    resolve_default_args(signature, args).is_some()
}

/// The first bundle in `args` of exactly `shape`.
///
/// Falls back to [`DefaultArgs::unset`] when no such bundle is present.
pub fn extract_default_args(shape: &[Type], args: &[RegistrationArg]) -> DefaultArgs {
    args.iter()
        .filter_map(RegistrationArg::as_defaults)
        .find(|bundle| bundle.shape() == shape)
        .cloned()
        .unwrap_or_else(|| DefaultArgs::unset(shape))
}

/// The default arguments in `args` usable for `signature`.
///
/// Returns the empty bundle when `args` has no bundle or its bundle does not
/// match a trailing run of `signature`.
pub fn get_default_args(signature: &Signature, args: &[RegistrationArg]) -> DefaultArgs {
    match resolve_default_args(signature, args) {
        Some(shape) => extract_default_args(&shape, args),
        None => DefaultArgs::empty(),
    }
}
