//! Registration annotations
//!
//! [`RawAnnotation`] is the host's view of an annotation: a kind tag plus
//! positional and named values. [`CanonicalAnnotation`] is the normalized form
//! the planner consumes.

use super::lifetime::{Lifetime, RegistrationMode};
use super::type_ref::TypeRef;
use crate::constants::{ANNOTATION_TYPE_SUFFIX, BASE_ANNOTATION_KIND};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single annotation argument value
///
/// Lifetime and mode codes travel as [`AnnotationValue::Ordinal`]; they are
/// never stringified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    /// Explicitly absent value
    Null,
    /// Ordinal-coded enum value
    Ordinal(i64),
    /// List of type references
    Types(Vec<TypeRef>),
    /// Free text, such as a build-variant label
    Text(String),
}

impl AnnotationValue {
    /// Build a type list value
    pub fn types<I>(types: I) -> Self
    where
        I: IntoIterator<Item = TypeRef>,
    {
        Self::Types(types.into_iter().collect())
    }

    /// Ordinal code, if this value carries one
    pub fn as_ordinal(&self) -> Option<i64> {
        match self {
            Self::Ordinal(code) => Some(*code),
            _ => None,
        }
    }

    /// Text, if this value carries any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<i64> for AnnotationValue {
    fn from(code: i64) -> Self {
        Self::Ordinal(code)
    }
}

impl From<&str> for AnnotationValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<TypeRef>> for AnnotationValue {
    fn from(types: Vec<TypeRef>) -> Self {
        Self::Types(types)
    }
}

/// A named annotation argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedArgument {
    /// Argument name as written by the host
    pub name: String,
    /// Argument value
    pub value: AnnotationValue,
}

/// Annotation as supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnnotation {
    /// Kind tag, e.g. `TransientService`
    pub kind: String,

    /// Positional arguments in declaration order
    #[serde(default)]
    pub positional: Vec<AnnotationValue>,

    /// Named arguments in declaration order
    #[serde(default)]
    pub named: Vec<NamedArgument>,
}

impl RawAnnotation {
    /// Create an annotation with no arguments
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Append a positional argument
    pub fn with_positional(mut self, value: impl Into<AnnotationValue>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a named argument
    pub fn with_named(
        mut self,
        name: impl Into<String>,
        value: impl Into<AnnotationValue>,
    ) -> Self {
        self.named.push(NamedArgument {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// The closed set of annotation kinds with a canonical meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    /// Generic kind carrying lifetime and mode as codes
    Injectable,
    /// Always transient
    TransientService,
    /// Always scoped
    ScopedService,
    /// Always singleton
    SingletonService,
}

impl AnnotationKind {
    /// Every canonical kind, base kind first
    pub const ALL: [Self; 4] = [
        Self::Injectable,
        Self::TransientService,
        Self::ScopedService,
        Self::SingletonService,
    ];

    /// Canonical tag of this kind
    pub fn tag(self) -> &'static str {
        match self {
            Self::Injectable => BASE_ANNOTATION_KIND,
            Self::TransientService => "TransientService",
            Self::ScopedService => "ScopedService",
            Self::SingletonService => "SingletonService",
        }
    }

    /// Match a (possibly qualified or suffixed) tag against the canonical kinds
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = normalize_kind_tag(tag);
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Lifetime fixed by the kind, if any
    pub fn implied_lifetime(self) -> Option<Lifetime> {
        match self {
            Self::Injectable => None,
            Self::TransientService => Some(Lifetime::Transient),
            Self::ScopedService => Some(Lifetime::Scoped),
            Self::SingletonService => Some(Lifetime::Singleton),
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Strip namespace qualification and the conventional `Attribute` suffix
///
/// `Skanr.Attributes.InjectableAttribute` and `Injectable` both normalize to
/// `Injectable`.
pub fn normalize_kind_tag(tag: &str) -> &str {
    let tag = tag.trim();
    let simple = tag.rsplit('.').next().unwrap_or(tag);
    match simple.strip_suffix(ANNOTATION_TYPE_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => simple,
    }
}

/// Normalized annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAnnotation {
    /// Binding lifetime
    pub lifetime: Lifetime,
    /// Registration mode
    pub mode: RegistrationMode,
    /// Explicit interfaces, used by `Manual` mode
    pub manual_interfaces: Vec<TypeRef>,
    /// Build-variant label, never blank
    pub label: Option<String>,
}

impl CanonicalAnnotation {
    /// Create an annotation with no explicit interfaces and no label
    pub fn new(lifetime: Lifetime, mode: RegistrationMode) -> Self {
        Self {
            lifetime,
            mode,
            manual_interfaces: Vec::new(),
            label: None,
        }
    }

    /// Set the explicit interface list
    pub fn with_interfaces(mut self, interfaces: Vec<TypeRef>) -> Self {
        self.manual_interfaces = interfaces;
        self
    }

    /// Set the build-variant label; blank labels are dropped
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = normalize_label(Some(label.into()));
        self
    }
}

/// Treat empty and whitespace-only labels as absent
pub fn normalize_label(label: Option<String>) -> Option<String> {
    label.filter(|value| !value.trim().is_empty())
}
