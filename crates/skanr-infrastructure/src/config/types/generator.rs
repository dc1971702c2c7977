//! Generator configuration types

use serde::{Deserialize, Serialize};
use skanr_application::{
    EmitterOptions, InvalidAnnotationPolicy, ManualInterfacePolicy, PassOptions,
};
use skanr_domain::constants::{
    DEFAULT_DIALECT, DEFAULT_ENTRY_POINT, DEFAULT_EXTENSION_HOOK, DEFAULT_GENERATED_NAMESPACE,
    DEFAULT_REGISTRATION_CLASS,
};

/// Settings for generated registration source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Emission dialect name
    pub dialect: String,

    /// Namespace of the generated type; the manifest unit when unset
    pub namespace: Option<String>,

    /// Name of the generated container-extension type
    pub class_name: String,

    /// Name of the generated entry point
    pub entry_point: String,

    /// Name of the host-extensible hook
    pub hook: String,

    /// Container API namespace; the dialect default when unset
    pub container_namespace: Option<String>,

    /// How `Manual` interface lists are checked
    pub manual_interfaces: ManualInterfacePolicy,

    /// Reaction to annotations that fail to resolve
    pub on_invalid_annotation: InvalidAnnotationPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dialect: DEFAULT_DIALECT.to_string(),
            namespace: None,
            class_name: DEFAULT_REGISTRATION_CLASS.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            hook: DEFAULT_EXTENSION_HOOK.to_string(),
            container_namespace: None,
            manual_interfaces: ManualInterfacePolicy::default(),
            on_invalid_annotation: InvalidAnnotationPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Namespace for a unit: configured value, then the unit name, then the default
    pub fn namespace_for(&self, unit: &str) -> String {
        self.namespace
            .as_deref()
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .or_else(|| Some(unit.trim()).filter(|unit| !unit.is_empty()))
            .unwrap_or(DEFAULT_GENERATED_NAMESPACE)
            .to_string()
    }

    /// Scaffold names for a unit
    pub fn emitter_options(&self, unit: &str) -> EmitterOptions {
        let options = EmitterOptions::new(self.namespace_for(unit))
            .with_class_name(&self.class_name)
            .with_entry_point(&self.entry_point)
            .with_hook(&self.hook);

        match &self.container_namespace {
            Some(namespace) => options.with_container_namespace(namespace),
            None => options,
        }
    }

    /// Behavioral switches for a pass
    pub fn pass_options(&self) -> PassOptions {
        PassOptions {
            manual_interfaces: self.manual_interfaces,
            on_invalid_annotation: self.on_invalid_annotation,
        }
    }
}
