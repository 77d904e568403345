//! Request-scoped service lookup.
//!
//! The query context carries a service provider through to downstream stages
//! without calling it. [`ServiceRegistry`] is a simple `TypeId`-keyed provider.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A type-erased, shareable service instance.
pub type SharedService = Arc<dyn Any + Send + Sync>;

/// Lookup of services by type.
pub trait ServiceProvider: Send + Sync {
    /// Returns the service registered for `type_id`, if any.
    fn get_service(&self, type_id: TypeId) -> Option<SharedService>;
}

impl<'a> dyn ServiceProvider + 'a {
    /// Typed lookup.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.get_service(TypeId::of::<T>())
            .and_then(|service| service.downcast::<T>().ok())
    }
}

/// Services keyed by their concrete type.
#[derive(Default, Clone)]
pub struct ServiceRegistry {
    services: HashMap<TypeId, SharedService>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `service`, replacing any previous instance of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, service: T) -> &mut Self {
        self.services.insert(TypeId::of::<T>(), Arc::new(service));
        self
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<T: Any + Send + Sync>(mut self, service: T) -> Self {
        self.insert(service);
        self
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceProvider for ServiceRegistry {
    fn get_service(&self, type_id: TypeId) -> Option<SharedService> {
        self.services.get(&type_id).cloned()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.services.len())
            .finish()
    }
}
