//! Type-erased container for initialized feature slices.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Shared state of one feature slice.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Short lowercase name, used in logs and introspection.
    fn name(&self) -> &'static str;

    /// Allows downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A slice produced by a feature's `init`.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: state.name(), state: Box::new(state) }
    }

    /// Returns the concrete slice if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
