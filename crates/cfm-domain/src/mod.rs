//! # Domain Layer
//!
//! Pure types shared by every layer of the CFM component assembly engine.
//! Nothing here performs I/O, logs, or knows about concrete components.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`graph`] | Generic directed graph, topological sort, parallel levels |
//! | [`value_objects`] | `ServiceType`, `LifecyclePhase`, `RuntimeMode` |
//! | [`error`] | Domain error enum and `Result` alias |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod error;
pub mod graph;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{LifecyclePhase, RuntimeMode, ServiceType};
