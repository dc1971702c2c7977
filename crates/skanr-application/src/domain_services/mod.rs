//! Domain Services
//!
//! The three stages of a registration pass.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`AnnotationResolver`] | Raw annotation to canonical annotation |
//! | [`RegistrationPlanner`] | Mode dispatch producing pending registrations |
//! | [`SourceEmitter`] | Grouping, imports and display names for the output document |

/// Annotation canonicalization
pub mod annotation_resolver;
/// Mode dispatch
pub mod registration_planner;
/// Output document construction
pub mod source_emitter;

pub use annotation_resolver::AnnotationResolver;
pub use registration_planner::{ManualInterfacePolicy, RegistrationPlanner};
pub use source_emitter::SourceEmitter;
