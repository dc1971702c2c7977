//! Configuration types module

pub mod app;
pub mod generator;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use generator::GeneratorConfig;
pub use logging::LoggingConfig;
