//! Runtime mode of the hosting process

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode the hosting agent or manager process runs in
///
/// The engine never branches on the mode itself; it is handed to every
/// assembly through its context so components can relax checks or enable
/// diagnostics outside production.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// Hardened defaults
    #[default]
    Production,
    /// Local development
    Development,
    /// Development plus verbose diagnostics
    Debug,
}

impl RuntimeMode {
    /// True for `Development` and `Debug`
    pub fn is_development(self) -> bool {
        !matches!(self, Self::Production)
    }

    /// Lowercase mode name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeMode {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            "debug" => Ok(Self::Debug),
            other => Err(crate::error::Error::config(format!(
                "Invalid runtime mode: {other}. Use production, development, or debug"
            ))),
        }
    }
}
