//! Application ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmitDialect`] | Target-language rendering of generated registrations |
//! | [`DiagnosticSink`] | Receiver for pass diagnostics |
//! | [`registry`] | Link-time registry of emission dialects |

pub mod diagnostics;
pub mod dialect;
pub mod registry;

pub use diagnostics::{CollectingSink, DiagnosticSink};
pub use dialect::{EmitDialect, EmitterOptions};
pub use registry::{DialectEntry, EMIT_DIALECTS, list_dialects, resolve_dialect};
