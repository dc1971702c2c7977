//! Domain Layer - Skanr
//!
//! Core types for turning registration annotations on declared types into
//! dependency-injection bindings.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Type references, annotations, registrations, document model |
//! | [`diagnostics`] | Pass diagnostics and their severities |
//! | [`error`] | The crate-wide [`Error`] type |
//! | [`constants`] | Defaults shared by every layer |
//!
//! The domain has no knowledge of where type metadata comes from or how the
//! generated text is written; those concerns live in the outer crates.

pub mod constants;
#[macro_use]
pub mod diagnostics;
pub mod error;
pub mod value_objects;

pub use diagnostics::{DiagnosticRecord, PassDiagnostic, Severity};
pub use error::{Error, Result};
pub use value_objects::*;
