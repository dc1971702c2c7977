//! Registration Planner
//!
//! Applies the mode-dispatch table to one declared type and one canonical
//! annotation. Rules are evaluated in order; the first match wins:
//!
//! | # | Mode | Condition | Result |
//! |---|------|-----------|--------|
//! | 1 | `Instance` | always | self-binding |
//! | 2 | `AllInterfaces` | contracts present | one binding per contract |
//! | 3 | `FirstInterface` | contracts present | first contract only |
//! | 4 | `Auto` | contracts present | first contract only |
//! | 5 | `Manual` | explicit list present | one binding per listed type |
//! | 6 | any | otherwise | self-binding |

use serde::{Deserialize, Serialize};
use skanr_domain::{
    CanonicalAnnotation, DeclaredType, PendingRegistration, RegistrationMode, TypeRef,
};

/// How explicitly listed `Manual` interfaces are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualInterfacePolicy {
    /// Accept every listed type as given
    #[default]
    Unchecked,
    /// Drop listed types the declared type does not implement
    ImplementedOnly,
}

/// Turns canonical annotations into pending registrations
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationPlanner {
    manual_policy: ManualInterfacePolicy,
}

impl RegistrationPlanner {
    /// Create a planner with the default manual-interface policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manual-interface policy
    pub fn with_manual_policy(mut self, policy: ManualInterfacePolicy) -> Self {
        self.manual_policy = policy;
        self
    }

    /// Plan the registrations one annotation yields for `declared_type`
    pub fn plan(
        &self,
        declared_type: &DeclaredType,
        annotation: &CanonicalAnnotation,
    ) -> Vec<PendingRegistration> {
        let contracts = &declared_type.implements;

        let services: Vec<&TypeRef> = match annotation.mode {
            RegistrationMode::Instance => vec![&declared_type.name],
            RegistrationMode::AllInterfaces if !contracts.is_empty() => contracts.iter().collect(),
            RegistrationMode::FirstInterface | RegistrationMode::Auto if !contracts.is_empty() => {
                contracts.iter().take(1).collect()
            }
            RegistrationMode::Manual if !annotation.manual_interfaces.is_empty() => {
                match self.manual_policy {
                    ManualInterfacePolicy::Unchecked => {
                        annotation.manual_interfaces.iter().collect()
                    }
                    ManualInterfacePolicy::ImplementedOnly => annotation
                        .manual_interfaces
                        .iter()
                        .filter(|listed| contracts.contains(listed))
                        .collect(),
                }
            }
            _ => vec![&declared_type.name],
        };

        let group_name = declared_type.group_name();
        services
            .into_iter()
            .map(|service| PendingRegistration {
                group_name: group_name.clone(),
                label: annotation.label.clone(),
                service_type: service.clone(),
                implementation_type: declared_type.name.clone(),
                lifetime: annotation.lifetime,
            })
            .collect()
    }
}
