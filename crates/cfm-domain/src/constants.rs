//! Domain layer constants
//!
//! Infrastructure-specific constants remain in `cfm_infrastructure::constants`.

/// Separator used when rendering a cycle path for humans
pub const CYCLE_PATH_SEPARATOR: &str = " -> ";

