//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cfm.toml";

/// Default configuration directory name (under cwd and the user config dir)
pub const DEFAULT_CONFIG_DIR: &str = "cfm";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CFM";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive that overrides the configured level
pub const LOG_FILTER_ENV: &str = "CFM_LOG";

/// Log file prefix used when the configured path has no file stem
pub const DEFAULT_LOG_FILE_PREFIX: &str = "cfm";
