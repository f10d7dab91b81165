//! Call arguments

use std::any::Any;
use std::fmt;

use crate::ty::Type;
use crate::variant::Variant;

/// Borrowed view of one incoming call argument.
///
/// Carries enough type information for an invoker to attempt a typed
/// extraction; it never owns the value.
#[derive(Clone, Copy)]
pub struct Argument<'a> {
    value: &'a Variant,
}

impl<'a> Argument<'a> {
    /// Wrap a variant as an argument
    #[inline]
    pub fn new(value: &'a Variant) -> Self {
        Self { value }
    }

    /// The wrapped variant
    #[inline]
    pub fn variant(&self) -> &'a Variant {
        self.value
    }

    /// Type of the carried value, `None` when the variant is empty
    #[inline]
    pub fn get_type(&self) -> Option<Type> {
        self.value.get_type()
    }

    /// Check whether the carried value is a `T`
    #[inline]
    pub fn is_type<T: Any>(&self) -> bool {
        self.value.is_type::<T>()
    }

    /// Borrow the carried value as `T`
    #[inline]
    pub fn get_value<T: Any>(&self) -> Option<&'a T> {
        self.value.get_value::<T>()
    }
}

impl<'a> From<&'a Variant> for Argument<'a> {
    fn from(value: &'a Variant) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Argument").field(self.value).finish()
    }
}

/// Borrow a list of variants as an ordered argument list
pub fn arguments(values: &[Variant]) -> Vec<Argument<'_>> {
    values.iter().map(Argument::new).collect()
}
