//! Unit tests for pass diagnostics

use skanr_domain::{DiagnosticRecord, PassDiagnostic, Severity};

#[test]
fn test_codes_and_severities() {
    let cases = [
        (
            PassDiagnostic::Started { unit: "App".into() },
            "START",
            Severity::Info,
        ),
        (
            PassDiagnostic::Found {
                declared_type: "App.Service".into(),
                kinds: "TransientService".into(),
            },
            "FOUND",
            Severity::Info,
        ),
        (
            PassDiagnostic::MissingBaseKind {
                base_kind: "Injectable".into(),
            },
            "MISSING_BASE_KIND",
            Severity::Fatal,
        ),
        (
            PassDiagnostic::EmptyResult { unit: "App".into() },
            "EMPTY_RESULT",
            Severity::Warning,
        ),
    ];

    for (diagnostic, code, severity) in cases {
        assert_eq!(diagnostic.code(), code);
        assert_eq!(diagnostic.severity(), severity);
    }
}

#[test]
fn test_subject_is_declared_type() {
    let found = PassDiagnostic::Found {
        declared_type: "App.Service".into(),
        kinds: "ScopedService".into(),
    };
    assert_eq!(found.subject(), Some("App.Service"));

    let started = PassDiagnostic::Started { unit: "App".into() };
    assert_eq!(started.subject(), None);
}

#[test]
fn test_display_message() {
    let invalid = PassDiagnostic::InvalidAnnotation {
        declared_type: "App.Service".into(),
        kind: "PooledService".into(),
        reason: "unsupported kind".into(),
    };

    assert_eq!(
        invalid.to_string(),
        "Invalid annotation [PooledService] on App.Service: unsupported kind"
    );
    assert!(invalid.severity().is_failure());
}

#[test]
fn test_record_flattens_diagnostic() {
    let generated = PassDiagnostic::Generated {
        hint_name: "SkanrRegistrations.g.cs".into(),
        registrations: 3,
        groups: 2,
    };

    let record = DiagnosticRecord::from(&generated);

    assert_eq!(record.code, "GENERATED");
    assert_eq!(record.severity, Severity::Info);
    assert_eq!(record.subject, None);
    assert!(record.message.contains("3 registrations in 2 groups"));
}
