//! Emission Dialect Registry
//!
//! Auto-registration system for emission dialects using linkme distributed slices.

use std::sync::Arc;

use skanr_domain::{Error, Result};

use crate::ports::dialect::EmitDialect;

/// Registry entry for emission dialects
///
/// Each dialect registers itself with this entry using
/// `#[linkme::distributed_slice(EMIT_DIALECTS)]`.
pub struct DialectEntry {
    /// Unique dialect name (e.g., "csharp", "rust")
    pub name: &'static str,
    /// Alternative names accepted when resolving
    pub aliases: &'static [&'static str],
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the dialect
    pub factory: fn() -> Arc<dyn EmitDialect>,
}

impl DialectEntry {
    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

#[linkme::distributed_slice]
pub static EMIT_DIALECTS: [DialectEntry] = [..];

/// Resolve an emission dialect by name or alias (case-insensitive)
///
/// # Errors
///
/// Returns [`Error::UnknownDialect`] listing the registered names when nothing matches.
pub fn resolve_dialect(name: &str) -> Result<Arc<dyn EmitDialect>> {
    let name = name.trim();

    if let Some(entry) = EMIT_DIALECTS.iter().find(|entry| entry.matches(name)) {
        return Ok((entry.factory)());
    }

    let available: Vec<&str> = list_dialects().into_iter().map(|(name, _)| name).collect();

    Err(Error::UnknownDialect {
        name: name.to_string(),
        available: available.join(", "),
    })
}

/// List all registered dialects as (name, description), sorted by name
pub fn list_dialects() -> Vec<(&'static str, &'static str)> {
    let mut dialects: Vec<_> = EMIT_DIALECTS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    dialects.sort_unstable();
    dialects
}
