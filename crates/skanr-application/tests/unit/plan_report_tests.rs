//! Unit tests for plan reports

use crate::common::registration;
use skanr_application::{PlanReport, Reporter};
use skanr_domain::{DiagnosticRecord, Lifetime, PassDiagnostic};

fn report() -> PlanReport {
    let registrations = vec![
        registration("App.T", None, "App.IA", "App.T", Lifetime::Transient),
        registration("App.T", Some("DEBUG"), "App.IB", "App.T", Lifetime::Singleton),
        registration("App.U", None, "App.U", "App.U", Lifetime::Scoped),
    ];
    let diagnostics = vec![DiagnosticRecord::from(&PassDiagnostic::Started {
        unit: "App".to_string(),
    })];
    PlanReport::new("App", registrations, diagnostics)
}

#[test]
fn test_summary_counts() {
    let report = report();

    assert_eq!(report.summary.registration_count, 3);
    assert_eq!(report.summary.group_count, 2);
    assert_eq!(report.summary.label_count, 1);
    assert!(report.summary.passed);
}

#[test]
fn test_human_readable_lists_registrations() {
    let text = Reporter::to_human_readable(&report());

    assert!(text.contains("Unit: App"));
    assert!(text.contains("[Transient] App.IA -> App.T"));
    assert!(text.contains("[Singleton] App.IB -> App.T #DEBUG"));
    assert!(text.contains("[INFO] START: Starting registration pass for App"));
    assert!(text.contains("Status: PASSED"));
}

#[test]
fn test_json_report_parses() {
    let json = Reporter::to_json(&report());
    let value: serde_json::Value = serde_json::from_str(&json).expect("json should parse");

    assert_eq!(value["summary"]["registration_count"], 3);
    assert_eq!(value["registrations"][1]["label"], "DEBUG");
    assert_eq!(value["registrations"][0]["service_type"], "App.IA");
}

#[test]
fn test_failure_diagnostic_fails_report() {
    let diagnostics = vec![DiagnosticRecord::from(&PassDiagnostic::InvalidAnnotation {
        declared_type: "App.T".to_string(),
        kind: "PooledService".to_string(),
        reason: "unrecognized annotation kind".to_string(),
    })];

    let report = PlanReport::new("App", Vec::new(), diagnostics);

    assert!(!report.summary.passed);
    assert!(Reporter::to_human_readable(&report).contains("Status: FAILED"));
}
