//! Configuration
//!
//! Layered application configuration loaded with Figment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, GeneratorConfig, LoggingConfig};
