//! Diagnostic Definition Macro
//!
//! Declarative macro for defining diagnostic enums with their code,
//! severity, message and subject in one place.
//!
//! # Example
//!
//! ```ignore
//! define_diagnostics! {
//!     pub enum PassDiagnostic {
//!         #[diagnostic(
//!             code = "FOUND",
//!             severity = Info,
//!             subject = declared_type,
//!             message = "Found {kinds} on {declared_type}"
//!         )]
//!         Found {
//!             declared_type: String,
//!             kinds: String,
//!         },
//!     }
//! }
//! ```

/// Macro to define diagnostic enums with automatic accessors
///
/// This macro generates:
/// - The enum with all variants
/// - `Display` implementation with formatted messages
/// - `code()`, `severity()` and `subject()` accessors
///
/// # Parameters
///
/// - `$vis`: Visibility modifier (pub, pub(crate), etc.)
/// - `$name`: Name of the enum
/// - For each variant:
///   - `code`: Stable diagnostic code reported to the host (e.g., "START")
///   - `severity`: Info, Warning, Error, or Fatal
///   - `subject` (optional): Field naming the declared type the diagnostic is about
///   - `message`: Display message; every field must appear as a `{field}` placeholder
#[macro_export]
macro_rules! define_diagnostics {
    // Subject helper - named subject field
    (@subject $subject:ident) => {
        Some($subject.as_str())
    };

    // Subject helper - no subject
    (@subject) => {
        None
    };

    (
        $vis:vis enum $name:ident {
            $(
                #[diagnostic(
                    code = $code:literal,
                    severity = $severity:ident
                    $(, subject = $subject:ident)?
                    , message = $msg:literal
                )]
                $variant:ident {
                    $( $field:ident : $field_ty:ty ),* $(,)?
                }
            ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
        $vis enum $name {
            $( $variant { $( $field: $field_ty ),* } ),*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            write!(f, $msg, $( $field = $field ),*)
                        }
                    ),*
                }
            }
        }

        impl $name {
            /// Stable code reported to the host
            pub fn code(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $code ),*
                }
            }

            /// Severity level
            pub fn severity(&self) -> $crate::diagnostics::Severity {
                match self {
                    $( Self::$variant { .. } => $crate::diagnostics::Severity::$severity ),*
                }
            }

            /// Declared type this diagnostic is about (if applicable)
            pub fn subject(&self) -> Option<&str> {
                match self {
                    $(
                        Self::$variant { $( $field ),* } => {
                            $( let _ = $field; )*
                            $crate::define_diagnostics!(@subject $( $subject )?)
                        }
                    ),*
                }
            }
        }
    };
}
