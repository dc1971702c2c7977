//! Type references
//!
//! A [`TypeRef`] names a type by namespace and simple name. Namespaces are
//! dot-separated as supplied by the host; dialects translate the separator
//! when rendering.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a declared or contract type
///
/// # Example
///
/// ```
/// use skanr_domain::TypeRef;
///
/// let ty = TypeRef::parse("Sample.App.IWeatherService").unwrap();
/// assert_eq!(ty.namespace(), "Sample.App");
/// assert_eq!(ty.name(), "IWeatherService");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    namespace: String,
    name: String,
}

impl TypeRef {
    /// Create a type reference from its parts
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse a qualified name such as `A.B.Service` or `A.Repo<A.Item>`
    ///
    /// Generic arguments stay part of the simple name; only dots before the
    /// first `<` separate namespace segments.
    pub fn parse(qualified: &str) -> Result<Self> {
        let qualified = qualified.trim();
        let head_end = qualified.find('<').unwrap_or(qualified.len());

        let (namespace, name, bad_namespace) = match qualified[..head_end].rfind('.') {
            Some(dot) => {
                let namespace = &qualified[..dot];
                (namespace, &qualified[dot + 1..], namespace.split('.').any(str::is_empty))
            }
            None => ("", qualified, false),
        };

        if name.is_empty() || name.starts_with('<') || bad_namespace {
            return Err(Error::invalid_type_name(qualified));
        }

        Ok(Self::new(namespace, name))
    }

    /// Namespace owning the type (empty for the global namespace)
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Simple name, including any generic arguments
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the type lives in the global namespace
    pub fn is_global(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Dot-separated qualified name
    pub fn qualified_name(&self) -> String {
        if self.is_global() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for TypeRef {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.qualified_name()
    }
}
