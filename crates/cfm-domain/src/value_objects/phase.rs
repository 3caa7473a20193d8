//! Lifecycle phase identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A lifecycle callback driven by the assembler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePhase {
    /// Register provided services, resolve earlier ones
    Init,
    /// Second pass once every assembly has initialized
    Prepare,
    /// Begin serving
    Start,
    /// First teardown pass
    Finalize,
    /// Second teardown pass
    Shutdown,
}

impl LifecyclePhase {
    /// Startup phases in execution order
    pub const STARTUP: [Self; 3] = [Self::Init, Self::Prepare, Self::Start];

    /// Teardown phases in execution order
    pub const TEARDOWN: [Self; 2] = [Self::Finalize, Self::Shutdown];

    /// Lowercase phase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Prepare => "prepare",
            Self::Start => "start",
            Self::Finalize => "finalize",
            Self::Shutdown => "shutdown",
        }
    }

    /// True for `finalize` and `shutdown`
    pub fn is_teardown(self) -> bool {
        matches!(self, Self::Finalize | Self::Shutdown)
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
