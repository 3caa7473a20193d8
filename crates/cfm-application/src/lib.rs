//! Application Layer - CFM component assembly engine
//!
//! This crate boots a set of pluggable components ("assemblies") in
//! dependency order and tears them down again.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines ports for assemblies, configuration and shutdown signalling
//! - Owns the runtime service registry assemblies wire through
//! - Resolves declared dependencies and sequences lifecycle phases
//! - Has no dependencies on infrastructure or external frameworks
//!
//! ## Use Cases
//!
//! - `ServiceAssembler`: register, assemble, shut down
//! - `AssemblyPlan`: dry-run dependency resolution
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `cfm-domain`: For errors, value objects and the dependency graph
//! - Pure Rust libraries for serialization and logging

pub mod ports;
pub mod registry;
pub mod use_cases;

pub use ports::*;
pub use registry::ServiceRegistry;
pub use use_cases::*;
