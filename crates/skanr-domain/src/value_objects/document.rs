//! Output document model
//!
//! The emitter builds this model from the accumulated registrations; a dialect
//! turns it into text. Display names are already resolved, so the model can be
//! rendered without consulting the original type references.

use super::lifetime::Lifetime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One binding statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Binding lifetime
    pub lifetime: Lifetime,
    /// Display name of the service type
    pub service: String,
    /// Display name of the implementation type
    pub implementation: String,
}

/// Bindings sharing one build-variant label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantBlock {
    /// Conditional-inclusion label; `None` for unconditional bindings
    pub label: Option<String>,
    /// Bindings in encounter order
    pub bindings: Vec<Binding>,
}

/// Bindings owned by one declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationGroup {
    /// Group name, used for the region marker
    pub name: String,
    /// Untagged block first, then labeled blocks in first-seen order
    pub blocks: Vec<VariantBlock>,
}

impl RegistrationGroup {
    /// Number of bindings across all blocks
    pub fn binding_count(&self) -> usize {
        self.blocks.iter().map(|block| block.bindings.len()).sum()
    }
}

/// Rendered registration source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    /// Suggested file name for the generated source
    pub hint_name: String,
    /// Namespace the registration type is declared in
    pub namespace: String,
    /// Deduplicated, sorted imports
    pub imports: Vec<String>,
    /// Grouped bindings
    pub groups: Vec<RegistrationGroup>,
    /// Final generated text
    pub text: String,
}

impl OutputDocument {
    /// Number of bindings across all groups
    pub fn binding_count(&self) -> usize {
        self.groups.iter().map(RegistrationGroup::binding_count).sum()
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
