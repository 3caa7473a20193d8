//! Configuration
//!
//! Typed application configuration loaded through figment, plus a
//! [`ConfigSource`](cfm_application::ports::ConfigSource) adapter that hands
//! the same merged sources to assemblies.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! json_format = false
//!
//! [runtime]
//! mode = "development"
//!
//! # Sections the engine does not know about are left for assemblies
//! [vault]
//! url = "http://localhost:8200"
//! ```

pub mod loader;
pub mod source;
pub mod types;

pub use loader::ConfigLoader;
pub use source::FigmentConfigSource;
pub use types::{AppConfig, LoggingConfig, RuntimeConfig};
