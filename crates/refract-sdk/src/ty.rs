//! Runtime type identity

use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Canonical, comparable identity of a concrete Rust type.
///
/// `TypeId` carries no reference or mutability qualifiers, so every `Type`
/// is already the raw type. Reference-ness of a parameter is tracked by the
/// parameter metadata, not here.
///
/// Equality and hashing use the `TypeId` only; the name is diagnostic.
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    name: &'static str,
}

impl Type {
    /// Get the identity of `T`
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// Underlying `TypeId`
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Diagnostic type name, as reported by `std::any::type_name`
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this is the identity of `T`
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
