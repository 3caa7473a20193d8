//! Service registry
//!
//! The runtime wiring surface assemblies use to publish and consume
//! capabilities. Instances are stored type-erased and handed back by clone,
//! so the usual pattern is to register an `Arc<dyn Trait>`:
//!
//! ```
//! use cfm_application::registry::ServiceRegistry;
//! use cfm_domain::ServiceType;
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".into()
//!     }
//! }
//!
//! let greeter = ServiceType::new("demo:greeter");
//! let mut registry = ServiceRegistry::new();
//! registry.register(greeter.clone(), Arc::new(English) as Arc<dyn Greeter>);
//!
//! let resolved: Arc<dyn Greeter> = registry.resolve(&greeter);
//! assert_eq!(resolved.greet(), "hello");
//! ```
//!
//! The registry has no internal locking. Assemblies that hand it to
//! background work must serialize access themselves.

use cfm_domain::error::{Error, Result};
use cfm_domain::value_objects::ServiceType;
use std::any::{Any, type_name};
use std::collections::HashMap;
use tracing::{debug, warn};

type Instance = Box<dyn Any + Send + Sync>;

/// Mutable map from service type to instance
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<ServiceType, Instance>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance; last writer wins
    pub fn register<T: Any + Send + Sync>(&mut self, service_type: ServiceType, instance: T) {
        debug!(service_type = %service_type, instance = type_name::<T>(), "Registering service");
        if self
            .services
            .insert(service_type.clone(), Box::new(instance))
            .is_some()
        {
            debug!(service_type = %service_type, "Replaced previously registered service");
        }
    }

    /// Resolve a required service
    ///
    /// # Panics
    ///
    /// Panics if nothing was registered under `service_type`, or if the
    /// instance is not a `T`. Both are wiring defects, not runtime conditions;
    /// use [`try_resolve`](Self::try_resolve) to get them as errors.
    pub fn resolve<T: Any + Clone>(&self, service_type: &ServiceType) -> T {
        match self.try_resolve(service_type) {
            Ok(instance) => instance,
            Err(e) => panic!("{e}"),
        }
    }

    /// Resolve a service, reporting absence or a type mismatch as an error
    pub fn try_resolve<T: Any + Clone>(&self, service_type: &ServiceType) -> Result<T> {
        let instance = self
            .services
            .get(service_type)
            .ok_or_else(|| Error::unregistered_service(service_type.clone()))?;
        instance
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::service_type_mismatch(service_type.clone(), type_name::<T>()))
    }

    /// Resolve an optional service
    ///
    /// Returns `None` if nothing was registered. A registered instance of the
    /// wrong type is also `None`, with a warning.
    pub fn resolve_optional<T: Any + Clone>(&self, service_type: &ServiceType) -> Option<T> {
        let instance = self.services.get(service_type)?;
        let resolved = instance.downcast_ref::<T>().cloned();
        if resolved.is_none() {
            warn!(
                service_type = %service_type,
                expected = type_name::<T>(),
                "Optional service registered with a different type"
            );
        }
        resolved
    }

    /// True if a service is registered under `service_type`
    pub fn contains(&self, service_type: &ServiceType) -> bool {
        self.services.contains_key(service_type)
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Registered service types, sorted
    pub fn service_types(&self) -> Vec<&ServiceType> {
        let mut types: Vec<_> = self.services.keys().collect();
        types.sort();
        types
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("service_count", &self.services.len())
            .field("services", &self.service_types())
            .finish()
    }
}
