//! Tracing-backed diagnostic sink
//!
//! Forwards every pass diagnostic to `tracing` at a level matching its
//! severity and keeps a copy for the caller.

use skanr_application::{CollectingSink, DiagnosticSink};
use skanr_domain::{PassDiagnostic, Severity};
use tracing::{error, info, warn};

/// Diagnostic sink logging through `tracing`
#[derive(Debug, Clone)]
pub struct TracingDiagnosticSink {
    unit: String,
    collected: CollectingSink,
}

impl TracingDiagnosticSink {
    /// Create a sink for one build unit
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            collected: CollectingSink::new(),
        }
    }

    /// Diagnostics reported so far
    pub fn collected(&self) -> &CollectingSink {
        &self.collected
    }

    /// Consume the sink, returning the collected diagnostics
    pub fn into_collected(self) -> CollectingSink {
        self.collected
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&mut self, diagnostic: PassDiagnostic) {
        let code = diagnostic.code();
        let subject = diagnostic.subject().unwrap_or_default();
        match diagnostic.severity() {
            Severity::Info => info!(unit = %self.unit, code, subject, "{diagnostic}"),
            Severity::Warning => warn!(unit = %self.unit, code, subject, "{diagnostic}"),
            Severity::Error | Severity::Fatal => {
                error!(unit = %self.unit, code, subject, "{diagnostic}");
            }
        }
        self.collected.report(diagnostic);
    }
}
