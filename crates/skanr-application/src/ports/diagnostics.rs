//! Diagnostic sink port

use skanr_domain::{DiagnosticRecord, PassDiagnostic, Severity};

/// Receives diagnostics raised during a registration pass
pub trait DiagnosticSink {
    /// Report one diagnostic
    fn report(&mut self, diagnostic: PassDiagnostic);
}

/// Sink that keeps every diagnostic in arrival order
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    diagnostics: Vec<PassDiagnostic>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected diagnostics
    pub fn diagnostics(&self) -> &[PassDiagnostic] {
        &self.diagnostics
    }

    /// Diagnostic codes in arrival order
    pub fn codes(&self) -> Vec<&'static str> {
        self.diagnostics.iter().map(PassDiagnostic::code).collect()
    }

    /// Whether any failure-level diagnostic was reported
    pub fn has_failures(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity().is_failure())
    }

    /// Highest severity reported, if any
    pub fn max_severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(PassDiagnostic::severity).max()
    }

    /// Serializable snapshot of the collected diagnostics
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.diagnostics.iter().map(DiagnosticRecord::from).collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: PassDiagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: PassDiagnostic) {
        (**self).report(diagnostic);
    }
}
