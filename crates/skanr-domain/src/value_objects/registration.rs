//! Resolved registrations awaiting emission

use super::lifetime::Lifetime;
use super::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

/// One resolved binding
///
/// `group_name` only controls output grouping; it never changes what is bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRegistration {
    /// Owning declared type's name
    pub group_name: String,
    /// Build-variant label restricting the binding, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Service contract being bound
    pub service_type: TypeRef,
    /// Type providing the service; always the annotated type
    pub implementation_type: TypeRef,
    /// Binding lifetime
    pub lifetime: Lifetime,
}

impl PendingRegistration {
    /// Whether the type is bound to itself
    pub fn is_self_binding(&self) -> bool {
        self.service_type == self.implementation_type
    }
}
