//! Domain Value Objects
//!
//! Immutable value objects shared by every layer of the assembly engine.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceType`] | Opaque capability key published and consumed by assemblies |
//! | [`LifecyclePhase`] | One of the five lifecycle callbacks driven by the assembler |
//! | [`RuntimeMode`] | Ambient runtime mode handed to every assembly |

/// Lifecycle phase identifiers
pub mod phase;
/// Runtime mode of the hosting process
pub mod runtime_mode;
/// Capability keys
pub mod service_type;

pub use phase::LifecyclePhase;
pub use runtime_mode::RuntimeMode;
pub use service_type::ServiceType;
