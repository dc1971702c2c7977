//! Binding lifetimes and registration modes
//!
//! Both are carried by annotations as ordinal codes. Unknown codes fall back
//! to a fixed default instead of failing: [`Lifetime::Transient`] and
//! [`RegistrationMode::Auto`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binding scope policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lifetime {
    /// One instance for the container's lifetime
    Singleton,
    /// One instance per logical scope
    Scoped,
    /// New instance per request
    #[default]
    Transient,
}

impl Lifetime {
    /// Decode an ordinal code, defaulting to `Transient` for unknown codes
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Singleton,
            1 => Self::Scoped,
            _ => Self::Transient,
        }
    }

    /// Ordinal code of this lifetime
    pub fn code(self) -> i64 {
        match self {
            Self::Singleton => 0,
            Self::Scoped => 1,
            Self::Transient => 2,
        }
    }

    /// Name used in generated binding statements
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Singleton => "Singleton",
            Self::Scoped => "Scoped",
            Self::Transient => "Transient",
        }
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy for choosing which service types a binding targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RegistrationMode {
    /// First implemented contract if any, otherwise the type itself
    #[default]
    Auto,
    /// First implemented contract
    FirstInterface,
    /// Every implemented contract, in declaration order
    AllInterfaces,
    /// The type itself
    Instance,
    /// The explicitly listed interfaces
    Manual,
}

impl RegistrationMode {
    /// Decode an ordinal code, defaulting to `Auto` for unknown codes
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::FirstInterface,
            2 => Self::AllInterfaces,
            3 => Self::Instance,
            4 => Self::Manual,
            _ => Self::Auto,
        }
    }

    /// Ordinal code of this mode
    pub fn code(self) -> i64 {
        match self {
            Self::Auto => 0,
            Self::FirstInterface => 1,
            Self::AllInterfaces => 2,
            Self::Instance => 3,
            Self::Manual => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::FirstInterface => "FirstInterface",
            Self::AllInterfaces => "AllInterfaces",
            Self::Instance => "Instance",
            Self::Manual => "Manual",
        }
    }
}

impl fmt::Display for RegistrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
