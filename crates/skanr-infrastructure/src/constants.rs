//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `skanr_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "skanr.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "skanr";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SKANR";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "SKANR_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "skanr";

// ============================================================================
// MANIFEST CONSTANTS
// ============================================================================

/// Extensions recognized as JSON manifests
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Extensions recognized as YAML manifests
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Extensions recognized as TOML manifests
pub const TOML_EXTENSIONS: &[&str] = &["toml"];
