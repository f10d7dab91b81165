//! Receiver slot of a call

use crate::ty::Type;
use crate::variant::Variant;

/// The bound receiver of a method call.
///
/// Factory functions have no receiver and are always called with
/// [`Instance::none`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Instance<'a> {
    target: Option<&'a Variant>,
}

impl<'a> Instance<'a> {
    /// The "no bound instance" placeholder
    #[inline]
    pub const fn none() -> Self {
        Self { target: None }
    }

    /// Bind a receiver
    #[inline]
    pub fn new(target: &'a Variant) -> Self {
        Self {
            target: Some(target),
        }
    }

    /// Check whether a non-empty receiver is bound
    pub fn is_valid(&self) -> bool {
        self.target.is_some_and(Variant::is_valid)
    }

    /// Type of the bound receiver
    pub fn get_type(&self) -> Option<Type> {
        self.target.and_then(Variant::get_type)
    }

    /// The bound receiver
    pub fn target(&self) -> Option<&'a Variant> {
        self.target
    }
}
