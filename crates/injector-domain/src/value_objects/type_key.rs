//! Type identity keys
//!
//! A [`TypeKey`] identifies a capability, parameter or destination type.
//! Identity comes from [`TypeId`], so two distinct types never collide; the
//! type name is kept for display and for deterministic ordering.

use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::constants::ANY_TYPE_NAME;

/// Opaque, comparable identity of a type
///
/// The key space is partitioned into the wildcard [`TypeKey::ANY`] and keys
/// of real types. No type ever produces `ANY`.
///
/// # Example
///
/// ```
/// use injector_domain::TypeKey;
///
/// trait Greeter {}
///
/// assert_eq!(TypeKey::of::<dyn Greeter>(), TypeKey::of::<dyn Greeter>());
/// assert_ne!(TypeKey::of::<String>(), TypeKey::ANY);
/// assert!(TypeKey::ANY.is_any());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(Repr);

// Variant order matters: `Any` sorts before every real type, and real types
// sort by name first so enumeration is stable across runs. `handle` is the
// id of `Arc<T>`, the shape a typed factory's output is erased from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Repr {
    Any,
    Type {
        name: &'static str,
        id: TypeId,
        handle: TypeId,
    },
}

impl TypeKey {
    /// Wildcard key meaning "unspecified"
    pub const ANY: TypeKey = TypeKey(Repr::Any);

    /// Key of the type `T`
    ///
    /// Works for unsized types, including trait objects such as
    /// `dyn Greeter + Send + Sync`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(Repr::Type {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
            handle: TypeId::of::<Arc<T>>(),
        })
    }

    /// Key of the type of `value`
    ///
    /// Only sized values are accepted: behind a trait object the static type
    /// is the trait, not the value's own type.
    pub fn of_val<T: 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// Whether this is the wildcard key
    pub fn is_any(&self) -> bool {
        matches!(self.0, Repr::Any)
    }

    /// Human-readable type name (`Any` for the wildcard)
    pub fn name(&self) -> &'static str {
        match self.0 {
            Repr::Any => ANY_TYPE_NAME,
            Repr::Type { name, .. } => name,
        }
    }

    /// Underlying [`TypeId`], `None` for the wildcard
    pub fn type_id(&self) -> Option<TypeId> {
        match self.0 {
            Repr::Any => None,
            Repr::Type { id, .. } => Some(id),
        }
    }

    /// [`TypeId`] of `Arc<T>`, `None` for the wildcard
    pub(crate) fn handle_type_id(&self) -> Option<TypeId> {
        match self.0 {
            Repr::Any => None,
            Repr::Type { handle, .. } => Some(handle),
        }
    }

    /// `None` for the wildcard, `Some(self)` otherwise
    pub fn specific(self) -> Option<Self> {
        if self.is_any() { None } else { Some(self) }
    }
}

impl Default for TypeKey {
    fn default() -> Self {
        Self::ANY
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name())
    }
}

impl Serialize for TypeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
