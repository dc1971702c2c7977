//! `skanr dialects`

use std::io::Write;

use anyhow::Context;
use skanr_application::list_dialects;

/// Print registered dialects, one per line
pub fn list(out: &mut dyn Write) -> anyhow::Result<()> {
    for (name, description) in list_dialects() {
        writeln!(out, "{name:<10} {description}").context("Failed to write dialect list")?;
    }
    Ok(())
}
