//! Service assembler
//!
//! Sequences every registered [`ServiceAssembly`] through its lifecycle.
//!
//! ## Startup
//!
//! `assemble()` resolves each assembly's `requires()` against the other
//! assemblies' `provides()`, sorts the resulting graph, and only then runs
//! `init`, `prepare` and `start`. Each phase completes across every assembly
//! before the next begins, always in dependency-first order. A missing
//! provider, a duplicate name or a cycle fails before any callback runs.
//!
//! ## Teardown
//!
//! `shutdown()` runs `finalize` and then `shutdown` in the same
//! dependency-first order used for startup (providers before consumers).
//!
//! ## Failure
//!
//! The first failing callback aborts the remaining work. Nothing is unwound:
//! assemblies that already completed a phase are left as they are.
//!
//! ```text
//! Unassembled -> Assembling -> Running -> ShuttingDown -> Shutdown
//!                    |                        |
//!                    v                        v
//!              AssemblyFailed          ShutdownFailed
//! ```

use super::dependency::{build_dependency_graph, dependency_first_order};
use super::plan::AssemblyPlan;
use crate::ports::{ConfigSource, ServiceAssembly, ServiceContext, StaticConfigSource};
use crate::registry::ServiceRegistry;
use cfm_domain::error::{Error, Result};
use cfm_domain::value_objects::{LifecyclePhase, RuntimeMode};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, info_span};

/// Lifecycle state of the whole set of assemblies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblerState {
    /// Accepting registrations
    Unassembled,
    /// Resolving dependencies or running startup phases
    Assembling,
    /// Every assembly started
    Running,
    /// Running teardown phases
    ShuttingDown,
    /// Every assembly shut down
    Shutdown,
    /// Dependency resolution or a startup callback failed
    AssemblyFailed,
    /// A teardown callback failed
    ShutdownFailed,
}

impl AssemblerState {
    /// Lowercase state name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unassembled => "unassembled",
            Self::Assembling => "assembling",
            Self::Running => "running",
            Self::ShuttingDown => "shutting_down",
            Self::Shutdown => "shutdown",
            Self::AssemblyFailed => "assembly_failed",
            Self::ShutdownFailed => "shutdown_failed",
        }
    }

    /// True for states no operation can leave
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Shutdown | Self::AssemblyFailed | Self::ShutdownFailed
        )
    }
}

impl fmt::Display for AssemblerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drives registered assemblies through init, prepare, start, finalize and shutdown
///
/// # Example
///
/// ```
/// use cfm_application::ports::{ServiceAssembly, ServiceContext};
/// use cfm_application::use_cases::ServiceAssembler;
/// use cfm_domain::{Result, ServiceType};
///
/// const STORE: ServiceType = ServiceType::from_static("cfm:store");
///
/// struct Store;
/// impl ServiceAssembly for Store {
///     fn name(&self) -> &str { "store" }
///     fn provides(&self) -> Vec<ServiceType> { vec![STORE] }
///     fn init(&mut self, ctx: &mut ServiceContext<'_>) -> Result<()> {
///         ctx.register(STORE, String::from("memory"));
///         Ok(())
///     }
/// }
///
/// struct Api;
/// impl ServiceAssembly for Api {
///     fn name(&self) -> &str { "api" }
///     fn requires(&self) -> Vec<ServiceType> { vec![STORE] }
///     fn init(&mut self, ctx: &mut ServiceContext<'_>) -> Result<()> {
///         let backend: String = ctx.resolve(&STORE);
///         assert_eq!(backend, "memory");
///         Ok(())
///     }
/// }
///
/// let mut assembler = ServiceAssembler::default();
/// assembler.register(Api)?;
/// assembler.register(Store)?;
/// assembler.assemble()?;
/// assert_eq!(assembler.startup_order(), vec!["store", "api"]);
/// assembler.shutdown()?;
/// # Ok::<(), cfm_domain::Error>(())
/// ```
pub struct ServiceAssembler {
    assemblies: Vec<Box<dyn ServiceAssembly>>,
    registry: ServiceRegistry,
    config: Arc<dyn ConfigSource>,
    mode: RuntimeMode,
    /// Indices into `assemblies`, dependency-first; set once resolution succeeds
    startup_order: Vec<usize>,
    state: AssemblerState,
}

impl ServiceAssembler {
    /// Create an assembler with the ambient configuration and runtime mode
    pub fn new(config: Arc<dyn ConfigSource>, mode: RuntimeMode) -> Self {
        Self {
            assemblies: Vec::new(),
            registry: ServiceRegistry::new(),
            config,
            mode,
            startup_order: Vec::new(),
            state: AssemblerState::Unassembled,
        }
    }

    /// Register an assembly; only allowed before `assemble()`
    pub fn register(&mut self, assembly: impl ServiceAssembly + 'static) -> Result<()> {
        self.register_boxed(Box::new(assembly))
    }

    /// Register an already boxed assembly; only allowed before `assemble()`
    pub fn register_boxed(&mut self, assembly: Box<dyn ServiceAssembly>) -> Result<()> {
        if self.state != AssemblerState::Unassembled {
            return Err(Error::invalid_state("register assemblies", self.state));
        }
        debug!(assembly = %assembly.name(), "Registering assembly");
        self.assemblies.push(assembly);
        Ok(())
    }

    /// Current lifecycle state
    pub fn state(&self) -> AssemblerState {
        self.state
    }

    /// Runtime mode handed to assemblies
    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// The shared service registry
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Number of registered assemblies
    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    /// True if no assembly is registered
    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }

    /// Assembly names in registration order
    pub fn assembly_names(&self) -> Vec<&str> {
        self.assemblies.iter().map(|a| a.name()).collect()
    }

    /// Assembly names in dependency-first order, empty until resolution succeeds
    pub fn startup_order(&self) -> Vec<&str> {
        self.startup_order
            .iter()
            .map(|&index| self.assemblies[index].name())
            .collect()
    }

    /// Resolve dependencies without running any lifecycle callback
    pub fn plan(&self) -> Result<AssemblyPlan> {
        AssemblyPlan::build(&self.assemblies)
    }

    /// Resolve dependencies, then run init, prepare and start on every assembly
    pub fn assemble(&mut self) -> Result<()> {
        if self.state != AssemblerState::Unassembled {
            return Err(Error::invalid_state("assemble", self.state));
        }
        self.transition(AssemblerState::Assembling);
        info!(assemblies = self.assemblies.len(), "Assembling services");

        let order = match self.resolve_order() {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "Dependency resolution failed");
                self.transition(AssemblerState::AssemblyFailed);
                return Err(e);
            }
        };
        self.startup_order.clone_from(&order);

        if let Err(e) = self.run_startup_phases(&order) {
            self.transition(AssemblerState::AssemblyFailed);
            return Err(e);
        }

        self.transition(AssemblerState::Running);
        info!(order = ?self.startup_order(), "All services started");
        Ok(())
    }

    /// Run finalize, then shutdown, on every assembly in startup order
    pub fn shutdown(&mut self) -> Result<()> {
        if self.state != AssemblerState::Running {
            return Err(Error::invalid_state("shut down", self.state));
        }
        self.transition(AssemblerState::ShuttingDown);

        let order = self.startup_order.clone();
        if let Err(e) = self.run_teardown_phases(&order) {
            self.transition(AssemblerState::ShutdownFailed);
            return Err(e);
        }

        self.transition(AssemblerState::Shutdown);
        info!("All services shut down");
        Ok(())
    }

    fn resolve_order(&self) -> Result<Vec<usize>> {
        let resolved = build_dependency_graph(&self.assemblies)?;
        dependency_first_order(&resolved.graph)
    }

    fn run_startup_phases(&mut self, order: &[usize]) -> Result<()> {
        LifecyclePhase::STARTUP
            .into_iter()
            .try_for_each(|phase| self.run_phase(phase, order))
    }

    fn run_teardown_phases(&mut self, order: &[usize]) -> Result<()> {
        LifecyclePhase::TEARDOWN
            .into_iter()
            .try_for_each(|phase| self.run_phase(phase, order))
    }

    /// Runs one phase over `order`, stopping at the first failure
    ///
    /// Startup callbacks receive a fresh context over the registry; teardown
    /// callbacks take none.
    fn run_phase(&mut self, phase: LifecyclePhase, order: &[usize]) -> Result<()> {
        info!(phase = %phase, "Running lifecycle phase");
        for &index in order {
            let assembly = &mut self.assemblies[index];
            let name = assembly.name().to_string();
            let span = info_span!("assembly", name = %name, phase = %phase);
            let _entered = span.enter();

            let outcome = match phase {
                LifecyclePhase::Finalize => assembly.finalize(),
                LifecyclePhase::Shutdown => assembly.shutdown(),
                startup => {
                    let mut ctx = ServiceContext::new(&mut self.registry, &*self.config, self.mode);
                    match startup {
                        LifecyclePhase::Init => assembly.init(&mut ctx),
                        LifecyclePhase::Prepare => assembly.prepare(&mut ctx),
                        _ => assembly.start(&mut ctx),
                    }
                }
            };

            if let Err(source) = outcome {
                error!(assembly = %name, phase = %phase, error = %source, "Phase failed");
                return Err(if phase.is_teardown() {
                    Error::shutdown(name, phase, source)
                } else {
                    Error::lifecycle(name, phase, source)
                });
            }
            debug!(assembly = %name, phase = %phase, "Phase succeeded");
        }
        Ok(())
    }

    fn transition(&mut self, next: AssemblerState) {
        debug!(from = %self.state, to = %next, "Assembler state changed");
        self.state = next;
    }
}

impl Default for ServiceAssembler {
    /// An assembler with an empty configuration in production mode
    fn default() -> Self {
        Self::new(Arc::new(StaticConfigSource::new()), RuntimeMode::default())
    }
}

impl fmt::Debug for ServiceAssembler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAssembler")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("assemblies", &self.assembly_names())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
