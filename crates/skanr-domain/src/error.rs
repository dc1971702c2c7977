//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Skanr
#[derive(Error, Debug)]
pub enum Error {
    /// An annotation could not be canonicalized
    #[error("Configuration error on {declared_type} [{kind}]: {message}")]
    Configuration {
        /// Declared type carrying the annotation
        declared_type: String,
        /// Kind tag of the offending annotation
        kind: String,
        /// What went wrong
        message: String,
    },

    /// The registry of recognized annotation kinds is unavailable
    #[error("Annotation kind '{base_kind}' not found; registration pass aborted")]
    MissingBaseKind {
        /// Base kind the host failed to provide
        base_kind: String,
    },

    /// A type reference could not be parsed
    #[error("Invalid type name: '{name}'")]
    InvalidTypeName {
        /// The rejected input
        name: String,
    },

    /// No emission dialect is registered under the requested name
    #[error("Unknown dialect '{name}' (available: {available})")]
    UnknownDialect {
        /// Requested dialect
        name: String,
        /// Comma-separated list of registered dialects
        available: String,
    },

    /// Application settings are invalid or could not be loaded
    #[error("Settings error: {message}")]
    Settings {
        /// Description of the settings error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Host metadata manifest could not be read or parsed
    #[error("Manifest error: {message}")]
    Manifest {
        /// Description of the manifest error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error for one annotation on one declared type
    pub fn configuration<D, K, M>(declared_type: D, kind: K, message: M) -> Self
    where
        D: Into<String>,
        K: Into<String>,
        M: Into<String>,
    {
        Self::Configuration {
            declared_type: declared_type.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a missing base kind error
    pub fn missing_base_kind<S: Into<String>>(base_kind: S) -> Self {
        Self::MissingBaseKind {
            base_kind: base_kind.into(),
        }
    }

    /// Create an invalid type name error
    pub fn invalid_type_name<S: Into<String>>(name: S) -> Self {
        Self::InvalidTypeName { name: name.into() }
    }

    /// Create a settings error without a source
    pub fn settings<S: Into<String>>(message: S) -> Self {
        Self::Settings {
            message: message.into(),
            source: None,
        }
    }

    /// Create a manifest error without a source
    pub fn manifest<S: Into<String>>(message: S) -> Self {
        Self::Manifest {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error aborts the whole pass rather than a single annotation
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }
}
