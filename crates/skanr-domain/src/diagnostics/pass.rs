//! Diagnostics reported by a registration pass

define_diagnostics! {
    pub enum PassDiagnostic {
        #[diagnostic(
            code = "START",
            severity = Info,
            message = "Starting registration pass for {unit}"
        )]
        Started { unit: String },

        #[diagnostic(
            code = "FOUND",
            severity = Info,
            subject = declared_type,
            message = "Found {kinds} on {declared_type}"
        )]
        Found { declared_type: String, kinds: String },

        #[diagnostic(
            code = "MISSING_BASE_KIND",
            severity = Fatal,
            message = "Annotation kind '{base_kind}' not found; no registrations generated"
        )]
        MissingBaseKind { base_kind: String },

        #[diagnostic(
            code = "INVALID_ANNOTATION",
            severity = Error,
            subject = declared_type,
            message = "Invalid annotation [{kind}] on {declared_type}: {reason}"
        )]
        InvalidAnnotation {
            declared_type: String,
            kind: String,
            reason: String,
        },

        #[diagnostic(
            code = "EMPTY_RESULT",
            severity = Warning,
            message = "No registrations produced for {unit}"
        )]
        EmptyResult { unit: String },

        #[diagnostic(
            code = "GENERATED",
            severity = Info,
            message = "Generated {hint_name}: {registrations} registrations in {groups} groups"
        )]
        Generated {
            hint_name: String,
            registrations: usize,
            groups: usize,
        },
    }
}
