//! Type-erased values crossing the factory boundary

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::type_key::TypeKey;

/// Type-erased product of a factory
///
/// Typed rules always store an `Arc<C>` inside, where `C` is the capability,
/// so the instance can be handed back as `Arc<C>` with
/// [`downcast_instance`].
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Erase a capability handle into an [`Instance`]
pub fn into_instance<C: ?Sized + Send + Sync + 'static>(value: Arc<C>) -> Instance {
    Arc::new(value)
}

/// View an [`Instance`] as the capability `C`
///
/// Returns `None` when the instance was not produced for `C`.
pub fn downcast_instance<C: ?Sized + Send + Sync + 'static>(instance: &Instance) -> Option<Arc<C>> {
    instance.as_ref().downcast_ref::<Arc<C>>().cloned()
}

/// Whether `instance` was erased from an `Arc<C>` where `C` is `capability`
///
/// The erased counterpart of [`downcast_instance`]. Always `false` for the
/// wildcard.
pub fn is_instance_of(instance: &Instance, capability: TypeKey) -> bool {
    let erased: &dyn Any = &**instance;
    capability.handle_type_id() == Some(erased.type_id())
}

/// Runtime value supplied to a resolution call and handed to the factory
pub struct Parameter {
    value: Box<dyn Any + Send + Sync>,
    key: TypeKey,
}

impl Parameter {
    /// Wrap a value, recording its concrete type
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            key: TypeKey::of::<T>(),
        }
    }

    /// Key of the wrapped value's runtime type
    pub fn type_key(&self) -> TypeKey {
        self.key
    }

    /// Borrow the value as `T` if that is its runtime type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Whether the wrapped value is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter").field("type", &self.key).finish_non_exhaustive()
    }
}
