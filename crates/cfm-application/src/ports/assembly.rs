//! Service assembly contract

use crate::ports::config::ConfigSource;
use crate::registry::ServiceRegistry;
use cfm_domain::error::Result;
use cfm_domain::value_objects::{RuntimeMode, ServiceType};
use std::any::Any;

/// A pluggable component booted by the assembler
///
/// An assembly declares the service types it provides and requires; the
/// assembler uses those declarations to order every lifecycle phase so that
/// providers always run before their consumers.
///
/// All callbacks default to no-ops, so an implementation only overrides the
/// phases it cares about.
///
/// # Example
///
/// ```
/// use cfm_application::ports::{ServiceAssembly, ServiceContext};
/// use cfm_domain::{Result, ServiceType};
/// use std::sync::Arc;
///
/// const CLOCK: ServiceType = ServiceType::from_static("cfm:clock");
///
/// struct ClockAssembly;
///
/// impl ServiceAssembly for ClockAssembly {
///     fn name(&self) -> &str {
///         "clock"
///     }
///
///     fn provides(&self) -> Vec<ServiceType> {
///         vec![CLOCK]
///     }
///
///     fn init(&mut self, ctx: &mut ServiceContext<'_>) -> Result<()> {
///         ctx.register(CLOCK, Arc::new(std::time::Instant::now()));
///         Ok(())
///     }
/// }
/// ```
pub trait ServiceAssembly: Send {
    /// Unique name among the registered assemblies
    fn name(&self) -> &str;

    /// Service types this assembly registers during `init`
    fn provides(&self) -> Vec<ServiceType> {
        Vec::new()
    }

    /// Service types this assembly resolves
    fn requires(&self) -> Vec<ServiceType> {
        Vec::new()
    }

    /// Register provided services and resolve required ones
    fn init(&mut self, _ctx: &mut ServiceContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Runs once every assembly has initialized
    fn prepare(&mut self, _ctx: &mut ServiceContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Begin serving
    fn start(&mut self, _ctx: &mut ServiceContext<'_>) -> Result<()> {
        Ok(())
    }

    /// First teardown pass
    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    /// Second teardown pass
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Ambient context passed to `init`, `prepare` and `start`
///
/// Gives access to the shared [`ServiceRegistry`], the configuration source
/// and the runtime mode. Logging goes through `tracing`; the assembler enters
/// a span naming the assembly and phase around every callback.
pub struct ServiceContext<'a> {
    registry: &'a mut ServiceRegistry,
    config: &'a dyn ConfigSource,
    mode: RuntimeMode,
}

impl<'a> ServiceContext<'a> {
    /// Create a context over a registry and configuration source
    pub fn new(
        registry: &'a mut ServiceRegistry,
        config: &'a dyn ConfigSource,
        mode: RuntimeMode,
    ) -> Self {
        Self {
            registry,
            config,
            mode,
        }
    }

    /// The shared registry
    pub fn registry(&self) -> &ServiceRegistry {
        &*self.registry
    }

    /// The shared registry, mutably
    pub fn registry_mut(&mut self) -> &mut ServiceRegistry {
        &mut *self.registry
    }

    /// Configuration visible to assemblies
    pub fn config(&self) -> &dyn ConfigSource {
        self.config
    }

    /// Runtime mode of the hosting process
    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Shorthand for [`ServiceRegistry::register`]
    pub fn register<T: Any + Send + Sync>(&mut self, service_type: ServiceType, instance: T) {
        self.registry.register(service_type, instance);
    }

    /// Shorthand for [`ServiceRegistry::resolve`]; panics if unregistered
    pub fn resolve<T: Any + Clone>(&self, service_type: &ServiceType) -> T {
        self.registry.resolve(service_type)
    }

    /// Shorthand for [`ServiceRegistry::resolve_optional`]
    pub fn resolve_optional<T: Any + Clone>(&self, service_type: &ServiceType) -> Option<T> {
        self.registry.resolve_optional(service_type)
    }
}

impl std::fmt::Debug for ServiceContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("registry", &self.registry)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
