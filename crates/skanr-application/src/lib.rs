//! Application Layer - Skanr
//!
//! Turns declared types and their registration annotations into generated
//! dependency-injection wiring.
//!
//! ## Pipeline
//!
//! ```text
//! DeclaredType ──► AnnotationResolver ──► RegistrationPlanner ──┐
//!      (per annotation)                                         │
//!                                      accumulated registrations ▼
//!                                   SourceEmitter ──► EmitDialect ──► OutputDocument
//! ```
//!
//! - `domain_services`: the resolver, planner and emitter
//! - `ports`: the dialect and diagnostic-sink interfaces, plus the dialect registry
//! - `dialects`: built-in C# and Rust renderers
//! - `use_cases`: [`GenerationPass`], which drives one complete pass, and the plan report
//!
//! ## Dependencies
//!
//! This crate depends only on `skanr-domain` and pure libraries. Reading
//! manifests, configuration and writing files belong to `skanr-infrastructure`.

pub mod dialects;
pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
