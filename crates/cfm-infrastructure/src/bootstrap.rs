//! Bootstrap
//!
//! Turns loaded configuration into a ready [`ServiceAssembler`]: the typed
//! runtime mode and the merged figment both flow into every assembly's
//! `ServiceContext`.

use crate::config::{AppConfig, ConfigLoader, FigmentConfigSource};
use crate::logging::init_logging;
use cfm_application::use_cases::ServiceAssembler;
use cfm_domain::error::Result;
use std::sync::Arc;
use tracing::info;

/// Loaded configuration plus an empty assembler wired to it
#[derive(Debug)]
pub struct Bootstrap {
    /// Typed application configuration
    pub config: AppConfig,
    /// Assembler ready for `register` calls
    pub assembler: ServiceAssembler,
}

/// Build an assembler from already loaded configuration
pub fn assembler_from_config(config: &AppConfig, source: FigmentConfigSource) -> ServiceAssembler {
    ServiceAssembler::new(Arc::new(source), config.runtime.mode)
}

/// Load configuration, install logging, and create an assembler
///
/// Set `install_logging` to false when the host already installed a subscriber.
pub fn bootstrap(loader: &ConfigLoader, install_logging: bool) -> Result<Bootstrap> {
    let (config, source) = loader.load_with_source()?;
    if install_logging {
        init_logging(&config.logging)?;
    }
    info!(mode = %config.runtime.mode, "Bootstrapping service assembler");

    let assembler = assembler_from_config(&config, source);
    Ok(Bootstrap { config, assembler })
}
