//! Source Emitter
//!
//! Builds the [`OutputDocument`] for a whole pass:
//!
//! 1. collect the import set (owning namespaces plus the container API namespace),
//! 2. pick a display name for every referenced type,
//! 3. group registrations by group name, then by label,
//! 4. hand the model to the dialect for rendering.
//!
//! Every step is a pure function of the ordered input, so two runs over the
//! same registrations produce identical text.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use skanr_domain::{
    Binding, OutputDocument, PendingRegistration, RegistrationGroup, TypeRef, VariantBlock,
};

use crate::ports::dialect::{EmitDialect, EmitterOptions};

/// Renders accumulated registrations as one output document
#[derive(Clone)]
pub struct SourceEmitter {
    dialect: Arc<dyn EmitDialect>,
    options: EmitterOptions,
}

impl SourceEmitter {
    /// Create an emitter for a dialect
    pub fn new(dialect: Arc<dyn EmitDialect>, options: EmitterOptions) -> Self {
        Self { dialect, options }
    }

    /// Build the document; `None` when there is nothing to emit
    pub fn emit(&self, registrations: &[PendingRegistration]) -> Option<OutputDocument> {
        if registrations.is_empty() {
            return None;
        }

        let names = DisplayNames::new(self.dialect.as_ref(), registrations);

        let mut document = OutputDocument {
            hint_name: self.dialect.hint_name().to_string(),
            namespace: self.options.namespace.clone(),
            imports: self.imports(registrations),
            groups: group_registrations(registrations, &names),
            text: String::new(),
        };
        document.text = self.dialect.render(&document, &self.options);

        Some(document)
    }

    fn imports(&self, registrations: &[PendingRegistration]) -> Vec<String> {
        let container = self
            .options
            .container_namespace
            .as_deref()
            .unwrap_or_else(|| self.dialect.default_container_namespace());

        let mut imports: BTreeSet<String> = registrations
            .iter()
            .flat_map(|r| [&r.service_type, &r.implementation_type])
            .filter(|ty| !ty.is_global())
            .map(|ty| self.dialect.namespace_path(ty.namespace()))
            .collect();

        if !container.is_empty() {
            imports.insert(self.dialect.container_path(container));
        }

        imports.into_iter().collect()
    }
}

/// Display names for every referenced type
///
/// A short name is used unless another referenced type with the same short
/// name lives in a different namespace; then every type sharing that short
/// name is fully qualified.
struct DisplayNames {
    names: HashMap<TypeRef, String>,
}

impl DisplayNames {
    fn new(dialect: &dyn EmitDialect, registrations: &[PendingRegistration]) -> Self {
        let mut namespaces_by_name: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for ty in registrations
            .iter()
            .flat_map(|r| [&r.service_type, &r.implementation_type])
        {
            namespaces_by_name
                .entry(ty.name())
                .or_default()
                .insert(ty.namespace());
        }

        let mut names = HashMap::new();
        for ty in registrations
            .iter()
            .flat_map(|r| [&r.service_type, &r.implementation_type])
        {
            if names.contains_key(ty) {
                continue;
            }
            let ambiguous = namespaces_by_name
                .get(ty.name())
                .is_some_and(|namespaces| namespaces.len() > 1);
            let display = if ambiguous {
                dialect.qualify(ty)
            } else {
                dialect.short_name(ty)
            };
            names.insert(ty.clone(), display);
        }

        Self { names }
    }

    fn get(&self, ty: &TypeRef) -> String {
        self.names
            .get(ty)
            .cloned()
            .unwrap_or_else(|| ty.qualified_name())
    }
}

/// Group by first-seen group name, then by label with the untagged block first
fn group_registrations(
    registrations: &[PendingRegistration],
    names: &DisplayNames,
) -> Vec<RegistrationGroup> {
    let mut groups: Vec<RegistrationGroup> = Vec::new();

    for registration in registrations {
        let group_index = match groups
            .iter()
            .position(|group| group.name == registration.group_name)
        {
            Some(index) => index,
            None => {
                groups.push(RegistrationGroup {
                    name: registration.group_name.clone(),
                    blocks: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let blocks = &mut groups[group_index].blocks;

        let block_index = match blocks
            .iter()
            .position(|block| block.label == registration.label)
        {
            Some(index) => index,
            None if registration.label.is_none() => {
                blocks.insert(
                    0,
                    VariantBlock {
                        label: None,
                        bindings: Vec::new(),
                    },
                );
                0
            }
            None => {
                blocks.push(VariantBlock {
                    label: registration.label.clone(),
                    bindings: Vec::new(),
                });
                blocks.len() - 1
            }
        };

        blocks[block_index].bindings.push(Binding {
            lifetime: registration.lifetime,
            service: names.get(&registration.service_type),
            implementation: names.get(&registration.implementation_type),
        });
    }

    groups
}
