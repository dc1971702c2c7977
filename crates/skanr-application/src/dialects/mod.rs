//! Built-in emission dialects
//!
//! Each dialect registers itself in [`EMIT_DIALECTS`](crate::ports::registry::EMIT_DIALECTS).

pub mod csharp;
pub mod rust;
pub mod source_builder;

pub use csharp::CSharpDialect;
pub use rust::RustDialect;
pub use source_builder::SourceBuilder;
