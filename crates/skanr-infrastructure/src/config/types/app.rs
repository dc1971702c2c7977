//! Main application configuration

use serde::{Deserialize, Serialize};

use super::generator::GeneratorConfig;
use super::logging::LoggingConfig;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generated source settings
    pub generator: GeneratorConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
