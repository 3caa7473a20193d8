//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-backed TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Lifecycle
//! | Module | Description |
//! |--------|-------------|
//! | [`infrastructure`] | Default shutdown coordinator |
//! | [`bootstrap`] | Builds a configured `ServiceAssembler` |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod infrastructure;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{Bootstrap, assembler_from_config, bootstrap};
pub use config::{AppConfig, ConfigLoader, FigmentConfigSource};
pub use error_ext::ErrorContext;
pub use infrastructure::DefaultShutdownCoordinator;
