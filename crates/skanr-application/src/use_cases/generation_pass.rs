//! Generation Pass Use Case
//!
//! Drives one registration pass over a build unit: filter annotations against
//! the kind registry, resolve and plan each one, accumulate the results in
//! enumeration order, then emit a single document.

use serde::{Deserialize, Serialize};
use skanr_domain::constants::BASE_ANNOTATION_KIND;
use skanr_domain::{
    DeclaredType, Error, KindRegistry, OutputDocument, PassDiagnostic, PendingRegistration,
    Result,
};
use tracing::{debug, info, warn};

use crate::domain_services::{
    AnnotationResolver, ManualInterfacePolicy, RegistrationPlanner, SourceEmitter,
};
use crate::ports::diagnostics::DiagnosticSink;

/// What to do when an annotation cannot be canonicalized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidAnnotationPolicy {
    /// Fail the whole pass
    #[default]
    Abort,
    /// Report the annotation and continue with the rest
    Skip,
}

/// Behavioral switches for a pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassOptions {
    /// How `Manual` interface lists are checked
    pub manual_interfaces: ManualInterfacePolicy,
    /// Reaction to annotations that fail to resolve
    pub on_invalid_annotation: InvalidAnnotationPolicy,
}

/// Type metadata for one build unit
#[derive(Debug, Clone, Default)]
pub struct PassInput {
    /// Build unit name, used in diagnostics
    pub unit: String,
    /// Declared types in host enumeration order
    pub declared_types: Vec<DeclaredType>,
    /// Recognized annotation kinds; `None` when the base kind is not visible
    pub kinds: Option<KindRegistry>,
}

impl PassInput {
    /// Create an input with the built-in kind registry
    pub fn new(unit: impl Into<String>, declared_types: Vec<DeclaredType>) -> Self {
        Self {
            unit: unit.into(),
            declared_types,
            kinds: Some(KindRegistry::builtin()),
        }
    }

    /// Replace the kind registry
    pub fn with_kinds(mut self, kinds: Option<KindRegistry>) -> Self {
        self.kinds = kinds;
        self
    }
}

/// Result of a completed pass
#[derive(Debug, Clone, Default)]
pub struct PassOutcome {
    /// Generated document; `None` when nothing was registered
    pub document: Option<OutputDocument>,
    /// Accumulated registrations in emission order
    pub registrations: Vec<PendingRegistration>,
}

/// Registration pass driver
pub struct GenerationPass {
    emitter: SourceEmitter,
    options: PassOptions,
}

impl GenerationPass {
    /// Create a pass emitting through `emitter`
    pub fn new(emitter: SourceEmitter) -> Self {
        Self {
            emitter,
            options: PassOptions::default(),
        }
    }

    /// Set the pass options
    pub fn with_options(mut self, options: PassOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve and plan every annotation without emitting
    ///
    /// # Errors
    ///
    /// [`Error::MissingBaseKind`] when no kind registry is available, or the
    /// first resolver failure under [`InvalidAnnotationPolicy::Abort`].
    pub fn plan<S>(&self, input: &PassInput, sink: &mut S) -> Result<Vec<PendingRegistration>>
    where
        S: DiagnosticSink + ?Sized,
    {
        info!(unit = %input.unit, types = input.declared_types.len(), "Starting registration pass");
        sink.report(PassDiagnostic::Started {
            unit: input.unit.clone(),
        });

        let Some(kinds) = input.kinds.as_ref() else {
            sink.report(PassDiagnostic::MissingBaseKind {
                base_kind: BASE_ANNOTATION_KIND.to_string(),
            });
            return Err(Error::missing_base_kind(BASE_ANNOTATION_KIND));
        };

        let resolver = AnnotationResolver::new(kinds);
        let planner = RegistrationPlanner::new().with_manual_policy(self.options.manual_interfaces);
        let mut registrations = Vec::new();

        for declared_type in &input.declared_types {
            let type_name = declared_type.name.qualified_name();
            let recognized: Vec<_> = declared_type
                .annotations
                .iter()
                .filter(|annotation| kinds.recognizes(&annotation.kind))
                .collect();

            if recognized.is_empty() {
                continue;
            }

            let kind_list = recognized
                .iter()
                .map(|annotation| annotation.kind.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            sink.report(PassDiagnostic::Found {
                declared_type: type_name.clone(),
                kinds: kind_list,
            });

            for annotation in recognized {
                let canonical = match resolver.resolve(&type_name, annotation) {
                    Ok(canonical) => canonical,
                    Err(error) => {
                        let reason = match &error {
                            Error::Configuration { message, .. } => message.clone(),
                            other => other.to_string(),
                        };
                        sink.report(PassDiagnostic::InvalidAnnotation {
                            declared_type: type_name.clone(),
                            kind: annotation.kind.clone(),
                            reason,
                        });
                        match self.options.on_invalid_annotation {
                            InvalidAnnotationPolicy::Skip if !error.is_fatal() => {
                                warn!(
                                    declared_type = %type_name,
                                    kind = %annotation.kind,
                                    "Skipping invalid annotation"
                                );
                                continue;
                            }
                            _ => return Err(error),
                        }
                    }
                };

                let planned = planner.plan(declared_type, &canonical);
                debug!(
                    declared_type = %type_name,
                    mode = %canonical.mode,
                    lifetime = %canonical.lifetime,
                    count = planned.len(),
                    "Planned registrations"
                );
                registrations.extend(planned);
            }
        }

        Ok(registrations)
    }

    /// Run a complete pass
    ///
    /// # Errors
    ///
    /// Same as [`GenerationPass::plan`]. An empty result is not an error.
    pub fn run<S>(&self, input: &PassInput, sink: &mut S) -> Result<PassOutcome>
    where
        S: DiagnosticSink + ?Sized,
    {
        let registrations = self.plan(input, sink)?;

        let Some(document) = self.emitter.emit(&registrations) else {
            warn!(unit = %input.unit, "No registrations produced");
            sink.report(PassDiagnostic::EmptyResult {
                unit: input.unit.clone(),
            });
            return Ok(PassOutcome {
                document: None,
                registrations,
            });
        };

        info!(
            unit = %input.unit,
            hint_name = %document.hint_name,
            registrations = registrations.len(),
            "Generated registration source"
        );
        sink.report(PassDiagnostic::Generated {
            hint_name: document.hint_name.clone(),
            registrations: registrations.len(),
            groups: document.groups.len(),
        });

        Ok(PassOutcome {
            document: Some(document),
            registrations,
        })
    }
}
