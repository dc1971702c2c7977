//! Declared types supplied by the host

use super::annotation::RawAnnotation;
use super::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

/// A type definition carrying registration annotations
///
/// The order of `implements` is the declaration order and is significant:
/// `FirstInterface` and `Auto` bind against its first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredType {
    /// Qualified identity of the type
    pub name: TypeRef,

    /// Implemented contract types, in declaration order
    #[serde(default)]
    pub implements: Vec<TypeRef>,

    /// Raw annotations, in declaration order
    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,
}

impl DeclaredType {
    /// Create a declared type with no contracts and no annotations
    pub fn new(name: TypeRef) -> Self {
        Self {
            name,
            implements: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Append an implemented contract
    pub fn implementing(mut self, contract: TypeRef) -> Self {
        self.implements.push(contract);
        self
    }

    /// Append an annotation
    pub fn with_annotation(mut self, annotation: RawAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Name used to group this type's registrations in the output
    pub fn group_name(&self) -> String {
        self.name.qualified_name()
    }
}
