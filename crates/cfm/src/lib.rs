//! # CFM
//!
//! A dependency-ordered component assembly engine.
//!
//! Processes boot by registering independently written components
//! ("assemblies"), each declaring the service types it provides and requires.
//! The engine derives a safe initialization order, rejects missing or circular
//! dependencies before any side effect, and drives every assembly through
//! `init`, `prepare`, `start`, `finalize` and `shutdown`.
//!
//! ## Example
//!
//! ```no_run
//! use cfm::application::ports::{ServiceAssembly, ServiceContext};
//! use cfm::infrastructure::{ConfigLoader, DefaultShutdownCoordinator, bootstrap};
//! use cfm::{Result, ServiceType};
//!
//! const CLOCK: ServiceType = ServiceType::from_static("demo:clock");
//!
//! struct Clock;
//!
//! impl ServiceAssembly for Clock {
//!     fn name(&self) -> &str {
//!         "clock"
//!     }
//!
//!     fn provides(&self) -> Vec<ServiceType> {
//!         vec![CLOCK]
//!     }
//!
//!     fn init(&mut self, ctx: &mut ServiceContext<'_>) -> Result<()> {
//!         ctx.register(CLOCK, std::time::Instant::now());
//!         Ok(())
//!     }
//! }
//!
//! # async fn demo() -> Result<()> {
//! let mut boot = bootstrap(&ConfigLoader::new(), true)?;
//! boot.assembler.register(Clock)?;
//! cfm::run(&mut boot.assembler, &DefaultShutdownCoordinator::new()).await
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, value objects and the generic dependency graph
//! - `application` - ports, the service registry and the assembler
//! - `infrastructure` - configuration, logging and shutdown coordination
//! - [`manifest`] - descriptor-only assemblies read from TOML, for plan inspection

/// Domain layer - errors, value objects and graphs
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cfm_domain::*;
}

/// Application layer - ports, registry and assembler
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cfm_application::*;
}

/// Infrastructure layer - config, logging and shutdown
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cfm_infrastructure::*;
}

pub mod manifest;
mod runner;

// Re-export commonly used domain types at the crate root
pub use domain::{Error, LifecyclePhase, Result, RuntimeMode, ServiceType};

// Re-export the assembler and its contract at the crate root
pub use application::{AssemblerState, AssemblyPlan, ServiceAssembler, ServiceAssembly, ServiceContext};

// Re-export main entry point at the crate root
pub use runner::run;
