//! Variant - type-erased value container
//!
//! A `Variant` either holds exactly one value of some concrete type or is
//! empty. The empty variant is the universal "no value / could not invoke"
//! sentinel returned by the invocation machinery.
//!
//! Values are stored behind an `Arc`, so cloning a variant never clones the
//! value and by-reference parameters can share it without copying.
//!
//! No conversion between distinct types is performed: a value can only be
//! read back as exactly the type it was stored as.

use std::any::{self, Any};
use std::fmt;
use std::sync::Arc;

use crate::error::{SdkError, SdkResult};
use crate::ty::Type;

/// Type-erased value container
#[derive(Clone, Default)]
pub struct Variant {
    inner: Option<Stored>,
}

#[derive(Clone)]
struct Stored {
    ty: Type,
    value: Arc<dyn Any + Send + Sync>,
}

impl Variant {
    /// Store a value
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Store an already shared value without re-allocating it
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: Some(Stored {
                ty: Type::of::<T>(),
                value,
            }),
        }
    }

    /// The empty variant
    #[inline]
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Check whether a value is stored
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.inner.is_some()
    }

    /// Type of the stored value, `None` when empty
    #[inline]
    pub fn get_type(&self) -> Option<Type> {
        self.inner.as_ref().map(|stored| stored.ty)
    }

    /// Check whether the stored value is a `T`
    pub fn is_type<T: Any>(&self) -> bool {
        self.get_type().is_some_and(|ty| ty.is::<T>())
    }

    /// Borrow the stored value as `T`
    pub fn get_value<T: Any>(&self) -> Option<&T> {
        self.inner.as_ref()?.value.downcast_ref::<T>()
    }

    /// Copy the stored value out as `T`
    pub fn convert<T: Any + Clone>(&self) -> Option<T> {
        self.get_value::<T>().cloned()
    }

    /// Like [`Variant::convert`], but reports why the value could not be read
    pub fn try_convert<T: Any + Clone>(&self) -> SdkResult<T> {
        let stored = self.inner.as_ref().ok_or(SdkError::Empty)?;
        stored
            .value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| SdkError::TypeMismatch {
                expected: any::type_name::<T>().to_string(),
                got: stored.ty.name().to_string(),
            })
    }

    /// Get a shared handle to the stored value without copying it
    pub fn shared<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let stored = self.inner.as_ref()?;
        Arc::clone(&stored.value).downcast::<T>().ok()
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(stored) => write!(f, "Variant({})", stored.ty.name()),
            None => f.write_str("Variant(empty)"),
        }
    }
}
