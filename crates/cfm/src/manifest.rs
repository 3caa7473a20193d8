//! Assembly manifest
//!
//! Declares assemblies by name and capabilities only, so a dependency plan
//! can be checked without the real components:
//!
//! ```toml
//! [[assembly]]
//! name = "store"
//! provides = ["cfm:store"]
//!
//! [[assembly]]
//! name = "api"
//! requires = ["cfm:store"]
//! ```

use cfm_application::ports::ServiceAssembly;
use cfm_application::use_cases::ServiceAssembler;
use cfm_domain::error::{Error, Result};
use cfm_domain::value_objects::ServiceType;
use cfm_infrastructure::error_ext::ErrorContext;
use serde::Deserialize;
use std::path::Path;

/// A parsed manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Declared assemblies in file order
    #[serde(rename = "assembly", default)]
    pub assemblies: Vec<AssemblyDescriptor>,
}

/// One `[[assembly]]` entry
///
/// Registered as an assembly whose lifecycle callbacks do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssemblyDescriptor {
    /// Assembly name
    pub name: String,
    /// Provided service types
    #[serde(default)]
    pub provides: Vec<ServiceType>,
    /// Required service types
    #[serde(default)]
    pub requires: Vec<ServiceType>,
}

impl ServiceAssembly for AssemblyDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn provides(&self) -> Vec<ServiceType> {
        self.provides.clone()
    }

    fn requires(&self) -> Vec<ServiceType> {
        self.requires.clone()
    }
}

impl Manifest {
    /// Parse a manifest from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_with_source("Invalid manifest", e))
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .io_context(format!("Failed to read manifest {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Register every descriptor with the assembler, in file order
    pub fn register_all(self, assembler: &mut ServiceAssembler) -> Result<()> {
        for descriptor in self.assemblies {
            assembler.register(descriptor)?;
        }
        Ok(())
    }
}
