//! Error extension utilities
//!
//! Context extension methods that convert library errors into the domain
//! [`Error`] with a description of what was being attempted.

use skanr_domain::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use skanr_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .with_io_context(|| format!("Failed to read manifest: {}", path.display()))?;
/// let manifest: HostManifest = serde_json::from_str(&content)
///     .manifest_context("Invalid JSON manifest")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for I/O operations with lazy evaluation
    fn with_io_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Add context for manifest parsing
    fn manifest_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_io_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::Io {
            message: format!("{}: {}", f(), err),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::Settings {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn manifest_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::Manifest {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }
}
