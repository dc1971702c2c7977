//! # Skanr
//!
//! Generates dependency-injection registration source from annotated type
//! metadata.
//!
//! A host describes its declared types, their implemented contracts and
//! their registration annotations. Skanr resolves every annotation, plans
//! the bindings it implies, and emits one deterministic source document that
//! wires them into a container.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use skanr::application::{
//!     CollectingSink, EmitterOptions, GenerationPass, PassInput, SourceEmitter,
//! };
//! use skanr::application::dialects::CSharpDialect;
//!
//! let pass = GenerationPass::new(SourceEmitter::new(
//!     Arc::new(CSharpDialect),
//!     EmitterOptions::new("Sample.App"),
//! ));
//! let outcome = pass.run(&PassInput::new("Sample.App", types), &mut CollectingSink::new())?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value objects, diagnostics and the error type
//! - `application` - resolver, planner, emitter, dialects and the generation pass
//! - `infrastructure` - configuration, logging, manifests and output
//! - `cli` - the `skanr` command line

/// Domain layer - value objects, diagnostics and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use skanr_domain::*;
}

/// Application layer - resolution, planning and emission
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use skanr_application::*;
}

/// Infrastructure layer - configuration, logging and host I/O
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use skanr_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the pass driver at the crate root
pub use application::{GenerationPass, PassInput, PassOutcome};
