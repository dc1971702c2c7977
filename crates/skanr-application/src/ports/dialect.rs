//! Emission dialect port
//!
//! A dialect owns everything target-specific about the generated text: the
//! scaffold, import syntax, namespace separators, and how build-variant labels
//! become conditional blocks. The [`SourceEmitter`](crate::SourceEmitter)
//! decides *what* is emitted; the dialect decides *how it reads*.

use skanr_domain::constants::{
    DEFAULT_ENTRY_POINT, DEFAULT_EXTENSION_HOOK, DEFAULT_GENERATED_NAMESPACE,
    DEFAULT_REGISTRATION_CLASS,
};
use skanr_domain::{OutputDocument, TypeRef};

/// Names used in the generated scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Namespace the registration type is declared in
    pub namespace: String,
    /// Name of the container-extension type
    pub class_name: String,
    /// Name of the entry-point operation
    pub entry_point: String,
    /// Name of the host-extensible hook
    pub hook: String,
    /// Namespace of the container API; the dialect default when `None`
    pub container_namespace: Option<String>,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_GENERATED_NAMESPACE.to_string(),
            class_name: DEFAULT_REGISTRATION_CLASS.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            hook: DEFAULT_EXTENSION_HOOK.to_string(),
            container_namespace: None,
        }
    }
}

impl EmitterOptions {
    /// Create options for the given namespace with default scaffold names
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Set the container-extension type name
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the entry-point name
    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    /// Set the hook name
    pub fn with_hook(mut self, hook: impl Into<String>) -> Self {
        self.hook = hook.into();
        self
    }

    /// Override the container API namespace
    pub fn with_container_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.container_namespace = Some(namespace.into());
        self
    }
}

/// Target-language rendering of an [`OutputDocument`]
pub trait EmitDialect: Send + Sync {
    /// Registry name of the dialect
    fn name(&self) -> &'static str;

    /// Suggested file name for generated output
    fn hint_name(&self) -> &'static str;

    /// Namespace of the container API when none is configured
    fn default_container_namespace(&self) -> &'static str;

    /// Separator between namespace segments in the target language
    fn path_separator(&self) -> &'static str {
        "."
    }

    /// Namespace in target syntax
    fn namespace_path(&self, namespace: &str) -> String {
        namespace.replace('.', self.path_separator())
    }

    /// Container API namespace in target syntax
    fn container_path(&self, namespace: &str) -> String {
        self.namespace_path(namespace)
    }

    /// Simple name in target syntax
    fn short_name(&self, ty: &TypeRef) -> String {
        ty.name().replace('.', self.path_separator())
    }

    /// Fully qualified name in target syntax
    fn qualify(&self, ty: &TypeRef) -> String {
        ty.qualified_name().replace('.', self.path_separator())
    }

    /// Render the final text
    ///
    /// Everything except `text` is already filled in on `document`.
    fn render(&self, document: &OutputDocument, options: &EmitterOptions) -> String;
}
