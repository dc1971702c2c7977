//! Recognized annotation kinds
//!
//! The host decides which annotation kinds a compilation can see. A registry
//! only exists when the base kind is among them; without it a pass cannot
//! run at all.

use super::annotation::{AnnotationKind, normalize_kind_tag};
use crate::constants::BASE_ANNOTATION_KIND;

/// One recognized tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindEntry {
    /// Normalized tag
    pub tag: String,
    /// Canonical kind, `None` for host-declared members of the family that
    /// have no canonical meaning
    pub kind: Option<AnnotationKind>,
}

/// Closed set of annotation kinds the resolver accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindRegistry {
    entries: Vec<KindEntry>,
}

impl KindRegistry {
    /// Registry containing exactly the canonical kinds
    pub fn builtin() -> Self {
        let mut registry = Self {
            entries: Vec::new(),
        };
        for kind in AnnotationKind::ALL {
            registry.register(kind.tag(), Some(kind));
        }
        registry
    }

    /// Build a registry from the kinds visible to a compilation
    ///
    /// `derived` lists tags the host knows to belong to the annotation family
    /// without a canonical meaning. Returns `None` when the base kind is not
    /// visible.
    pub fn from_visible<V, D>(visible: V, derived: D) -> Option<Self>
    where
        V: IntoIterator,
        V::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
    {
        let mut registry = Self {
            entries: Vec::new(),
        };
        for tag in visible {
            let tag = tag.as_ref();
            registry.register(tag, AnnotationKind::from_tag(tag));
        }

        if !registry.recognizes(BASE_ANNOTATION_KIND) {
            return None;
        }

        for tag in derived {
            let tag = tag.as_ref();
            if !registry.recognizes(tag) {
                registry.register(tag, None);
            }
        }
        Some(registry)
    }

    /// Register a tag; re-registering an existing tag replaces its kind
    pub fn register(&mut self, tag: &str, kind: Option<AnnotationKind>) {
        let tag = normalize_kind_tag(tag);
        match self.entries.iter_mut().find(|entry| entry.tag == tag) {
            Some(entry) => entry.kind = kind,
            None => self.entries.push(KindEntry {
                tag: tag.to_string(),
                kind,
            }),
        }
    }

    /// Find the entry for a tag
    pub fn lookup(&self, tag: &str) -> Option<&KindEntry> {
        let tag = normalize_kind_tag(tag);
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// Whether the tag belongs to the annotation family
    pub fn recognizes(&self, tag: &str) -> bool {
        self.lookup(tag).is_some()
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
