//! Dialect Registry
//!
//! Emission dialects register themselves at link time with `linkme`
//! distributed slices and are resolved by name at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Dialect Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Dialect defines:   #[linkme::distributed_slice(EMIT_DIALECTS)]
//! │                        static ENTRY: DialectEntry = ...         │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static EMIT_DIALECTS: [..] = [..]    │
//! │                              ↓                                  │
//! │  3. Resolver queries:  EMIT_DIALECTS.iter()                     │
//! │                              ↓                                  │
//! │  4. Config selects:    "dialect = rust" → RustDialect           │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use skanr_application::ports::registry::{DialectEntry, EMIT_DIALECTS};
//!
//! #[linkme::distributed_slice(EMIT_DIALECTS)]
//! static KOTLIN_DIALECT: DialectEntry = DialectEntry {
//!     name: "kotlin",
//!     aliases: &["kt"],
//!     description: "Koin module registrations",
//!     factory: || Arc::new(KotlinDialect),
//! };
//! ```

pub mod dialect;

pub use dialect::{DialectEntry, EMIT_DIALECTS, list_dialects, resolve_dialect};
