//! # Infrastructure Layer
//!
//! Technical concerns around a registration pass.
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based layered configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Host I/O
//! | Module | Description |
//! |--------|-------------|
//! | [`manifest`] | Host metadata manifests (JSON, YAML, TOML) |
//! | [`output`] | Writing generated documents |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`diagnostics`] | Tracing-backed diagnostic sink |

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod error_ext;
pub mod logging;
pub mod manifest;
pub mod output;

pub use config::{AppConfig, ConfigLoader, GeneratorConfig, LoggingConfig};
pub use diagnostics::TracingDiagnosticSink;
pub use error_ext::ErrorContext;
pub use manifest::{HostManifest, ManifestFormat};
pub use output::write_document;
