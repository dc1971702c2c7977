//! Pass Diagnostics
//!
//! Diagnostics are the events a registration pass reports back to its host.
//!
//! | Code | Severity | Meaning |
//! |------|----------|---------|
//! | `START` | info | resolution pass began |
//! | `FOUND` | info | a declared type carries at least one recognized annotation |
//! | `MISSING_BASE_KIND` | fatal | the recognized-kind registry is unavailable |
//! | `INVALID_ANNOTATION` | error | an annotation could not be canonicalized |
//! | `EMPTY_RESULT` | warning | no registrations were produced |
//! | `GENERATED` | info | an output document was produced |

#[macro_use]
pub mod diagnostic_macro;
pub mod pass;

pub use pass::PassDiagnostic;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Whether a diagnostic of this severity means the pass did not succeed cleanly
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Error | Self::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Flattened diagnostic, suitable for reports and JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Stable diagnostic code
    pub code: String,
    /// Severity level
    pub severity: Severity,
    /// Declared type the diagnostic is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Human-readable message
    pub message: String,
}

impl From<&PassDiagnostic> for DiagnosticRecord {
    fn from(diagnostic: &PassDiagnostic) -> Self {
        Self {
            code: diagnostic.code().to_string(),
            severity: diagnostic.severity(),
            subject: diagnostic.subject().map(str::to_string),
            message: diagnostic.to_string(),
        }
    }
}
