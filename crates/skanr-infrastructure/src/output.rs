//! Writing generated documents

use std::fs;
use std::path::{Path, PathBuf};

use skanr_domain::{OutputDocument, Result};
use tracing::info;

use crate::error_ext::ErrorContext;

/// Write a document to `<dir>/<hint name>`, creating `dir` if needed
///
/// Returns the written path.
pub fn write_document(dir: &Path, document: &OutputDocument) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_io_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(&document.hint_name);
    fs::write(&path, document.text.as_bytes())
        .with_io_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        bindings = document.binding_count(),
        "Generated source written"
    );
    Ok(path)
}
