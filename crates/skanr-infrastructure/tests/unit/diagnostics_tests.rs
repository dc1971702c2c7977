//! Tests for the tracing diagnostic sink

use skanr_application::DiagnosticSink;
use skanr_domain::{PassDiagnostic, Severity};
use skanr_infrastructure::TracingDiagnosticSink;

#[test]
fn test_sink_keeps_reported_diagnostics() {
    let mut sink = TracingDiagnosticSink::new("Sample.App");

    sink.report(PassDiagnostic::Started {
        unit: "Sample.App".to_string(),
    });
    sink.report(PassDiagnostic::EmptyResult {
        unit: "Sample.App".to_string(),
    });

    assert_eq!(sink.collected().codes(), vec!["START", "EMPTY_RESULT"]);
    let collected = sink.into_collected();
    assert_eq!(collected.max_severity(), Some(Severity::Warning));
    assert!(!collected.has_failures());
}
