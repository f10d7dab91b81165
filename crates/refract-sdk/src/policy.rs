//! Invocation policies
//!
//! A policy decides how a value produced by a constructor or factory is
//! stored in the resulting `Variant`. The instantiated type reported by a
//! constructor wrapper depends on it.

use std::any::Any;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ty::Type;
use crate::variant::Variant;

/// How a produced value is wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Store the value itself
    #[default]
    AsObject,
    /// Store the value as `Box<T>`
    AsBox,
    /// Store the value as `Arc<T>`
    AsArc,
}

impl Policy {
    /// Wrap a produced value according to this policy
    pub fn wrap<T: Any + Send + Sync>(self, value: T) -> Variant {
        match self {
            Policy::AsObject => Variant::new(value),
            Policy::AsBox => Variant::new(Box::new(value)),
            Policy::AsArc => Variant::new(Arc::new(value)),
        }
    }

    /// Type of the variant produced by [`Policy::wrap`] for a `T`
    pub fn wrapped_type<T: Any>(self) -> Type {
        match self {
            Policy::AsObject => Type::of::<T>(),
            Policy::AsBox => Type::of::<Box<T>>(),
            Policy::AsArc => Type::of::<Arc<T>>(),
        }
    }

    /// Configuration name of the policy
    pub fn name(self) -> &'static str {
        match self {
            Policy::AsObject => "as_object",
            Policy::AsBox => "as_box",
            Policy::AsArc => "as_arc",
        }
    }
}
