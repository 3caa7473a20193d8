//! Use cases
//!
//! Dependency resolution and lifecycle sequencing over registered assemblies.

pub mod assembler;
mod dependency;
pub mod plan;

pub use assembler::{AssemblerState, ServiceAssembler};
pub use plan::{AssemblyPlan, PlannedDependency};
