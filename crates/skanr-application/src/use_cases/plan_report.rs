//! Plan Report Generation
//!
//! Summarizes a planned pass without emitting source:
//! - JSON for tooling
//! - Human-readable for terminal output

use serde::{Deserialize, Serialize};
use skanr_domain::{DiagnosticRecord, PendingRegistration};

/// Registrations and diagnostics of one planned pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    /// Build unit name
    pub unit: String,
    /// Summary statistics
    pub summary: PlanSummary,
    /// Registrations in emission order
    pub registrations: Vec<PendingRegistration>,
    /// Diagnostics in arrival order
    pub diagnostics: Vec<DiagnosticRecord>,
}

/// Summary of a planned pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of registrations
    pub registration_count: usize,
    /// Number of distinct groups
    pub group_count: usize,
    /// Number of distinct build-variant labels
    pub label_count: usize,
    /// Whether no error-level diagnostic was reported
    pub passed: bool,
}

impl PlanReport {
    /// Build a report from planned registrations and collected diagnostics
    pub fn new(
        unit: impl Into<String>,
        registrations: Vec<PendingRegistration>,
        diagnostics: Vec<DiagnosticRecord>,
    ) -> Self {
        let mut groups: Vec<&str> = registrations.iter().map(|r| r.group_name.as_str()).collect();
        groups.sort_unstable();
        groups.dedup();

        let mut labels: Vec<&str> = registrations
            .iter()
            .filter_map(|r| r.label.as_deref())
            .collect();
        labels.sort_unstable();
        labels.dedup();

        let summary = PlanSummary {
            registration_count: registrations.len(),
            group_count: groups.len(),
            label_count: labels.len(),
            passed: !diagnostics.iter().any(|d| d.severity.is_failure()),
        };

        Self {
            unit: unit.into(),
            summary,
            registrations,
            diagnostics,
        }
    }
}

/// Report generator
pub struct Reporter;

impl Reporter {
    /// Generate JSON report
    pub fn to_json(report: &PlanReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Generate human-readable report
    pub fn to_human_readable(report: &PlanReport) -> String {
        let mut output = String::new();

        output.push_str("=== Registration Plan ===\n\n");
        output.push_str(&format!("Unit: {}\n\n", report.unit));

        output.push_str("--- Summary ---\n");
        output.push_str(&format!(
            "Registrations: {}\n",
            report.summary.registration_count
        ));
        output.push_str(&format!("  Groups:      {}\n", report.summary.group_count));
        output.push_str(&format!("  Labels:      {}\n", report.summary.label_count));
        output.push('\n');

        let status = if report.summary.passed {
            "PASSED"
        } else {
            "FAILED"
        };
        output.push_str(&format!("Status: {}\n\n", status));

        if !report.registrations.is_empty() {
            output.push_str("--- Registrations ---\n");
            let mut current_group: Option<&str> = None;
            for r in &report.registrations {
                if current_group != Some(r.group_name.as_str()) {
                    output.push_str(&format!("  {}\n", r.group_name));
                    current_group = Some(r.group_name.as_str());
                }
                let label = r
                    .label
                    .as_deref()
                    .map(|label| format!(" #{label}"))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "    [{}] {} -> {}{}\n",
                    r.lifetime, r.service_type, r.implementation_type, label
                ));
            }
            output.push('\n');
        }

        if !report.diagnostics.is_empty() {
            output.push_str("--- Diagnostics ---\n");
            for d in &report.diagnostics {
                output.push_str(&format!("  [{}] {}: {}\n", d.severity, d.code, d.message));
            }
            output.push('\n');
        }

        output
    }
}
