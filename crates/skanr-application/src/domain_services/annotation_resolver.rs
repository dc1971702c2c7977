//! Annotation Resolver
//!
//! Normalizes one [`RawAnnotation`] into a [`CanonicalAnnotation`].
//!
//! Positional slots depend on the kind:
//!
//! | Kind | Slots |
//! |------|-------|
//! | `Injectable` | lifetime, mode, interfaces, label |
//! | `TransientService` / `ScopedService` / `SingletonService` | mode, interfaces, label |
//!
//! Named arguments are applied after all positional ones, so they always win.

use skanr_domain::constants::{
    NAMED_ARG_INTERFACES, NAMED_ARG_LABEL, NAMED_ARG_LIFETIME, NAMED_ARG_MODE,
    NAMED_ARG_PREPROCESSOR_LABEL,
};
use skanr_domain::{
    AnnotationKind, AnnotationValue, CanonicalAnnotation, Error, KindEntry, KindRegistry,
    Lifetime, RawAnnotation, RegistrationMode, Result, TypeRef, normalize_label,
};
use tracing::debug;

/// Logical attribute a value feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Lifetime,
    Mode,
    Interfaces,
    Label,
}

const INJECTABLE_SLOTS: &[Slot] = &[Slot::Lifetime, Slot::Mode, Slot::Interfaces, Slot::Label];
const LIFETIME_KIND_SLOTS: &[Slot] = &[Slot::Mode, Slot::Interfaces, Slot::Label];

fn positional_slots(kind: AnnotationKind) -> &'static [Slot] {
    match kind {
        AnnotationKind::Injectable => INJECTABLE_SLOTS,
        AnnotationKind::TransientService
        | AnnotationKind::ScopedService
        | AnnotationKind::SingletonService => LIFETIME_KIND_SLOTS,
    }
}

fn named_slot(name: &str) -> Option<Slot> {
    let key: String = name
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();

    match key.as_str() {
        NAMED_ARG_LIFETIME => Some(Slot::Lifetime),
        NAMED_ARG_MODE => Some(Slot::Mode),
        NAMED_ARG_INTERFACES => Some(Slot::Interfaces),
        NAMED_ARG_LABEL | NAMED_ARG_PREPROCESSOR_LABEL => Some(Slot::Label),
        _ => None,
    }
}

/// Canonicalizes annotations against a registry of recognized kinds
pub struct AnnotationResolver<'a> {
    registry: &'a KindRegistry,
}

/// Attribute values collected while walking an annotation's arguments
struct Draft {
    lifetime: Lifetime,
    mode: RegistrationMode,
    interfaces: Vec<TypeRef>,
    label: Option<String>,
}

impl<'a> AnnotationResolver<'a> {
    /// Create a resolver over the given registry
    pub fn new(registry: &'a KindRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the canonical kind of a tag
    ///
    /// Fails with a configuration error when the tag is unknown or belongs to
    /// the family without a canonical meaning.
    pub fn kind_of(&self, declared_type: &str, tag: &str) -> Result<AnnotationKind> {
        match self.registry.lookup(tag) {
            Some(KindEntry {
                kind: Some(kind), ..
            }) => Ok(*kind),
            Some(_) => Err(Error::configuration(
                declared_type,
                tag,
                "annotation kind derives from the base kind but has no registration semantics",
            )),
            None => Err(Error::configuration(
                declared_type,
                tag,
                "unrecognized annotation kind",
            )),
        }
    }

    /// Canonicalize one annotation attached to `declared_type`
    pub fn resolve(
        &self,
        declared_type: &str,
        annotation: &RawAnnotation,
    ) -> Result<CanonicalAnnotation> {
        let kind = self.kind_of(declared_type, &annotation.kind)?;

        let mut draft = Draft {
            lifetime: kind.implied_lifetime().unwrap_or_default(),
            mode: RegistrationMode::default(),
            interfaces: Vec::new(),
            label: None,
        };

        let slots = positional_slots(kind);
        for (index, value) in annotation.positional.iter().enumerate() {
            match slots.get(index) {
                Some(slot) => self.apply(&mut draft, *slot, value, declared_type, annotation)?,
                None => debug!(
                    declared_type,
                    kind = %kind,
                    index,
                    "Ignoring extra positional argument"
                ),
            }
        }

        for argument in &annotation.named {
            match named_slot(&argument.name) {
                Some(slot) => {
                    self.apply(&mut draft, slot, &argument.value, declared_type, annotation)?;
                }
                None => debug!(
                    declared_type,
                    kind = %kind,
                    argument = %argument.name,
                    "Ignoring unknown named argument"
                ),
            }
        }

        Ok(CanonicalAnnotation {
            lifetime: draft.lifetime,
            mode: draft.mode,
            manual_interfaces: draft.interfaces,
            label: normalize_label(draft.label),
        })
    }

    fn apply(
        &self,
        draft: &mut Draft,
        slot: Slot,
        value: &AnnotationValue,
        declared_type: &str,
        annotation: &RawAnnotation,
    ) -> Result<()> {
        match slot {
            Slot::Lifetime => draft.lifetime = decode_lifetime(value),
            Slot::Mode => draft.mode = decode_mode(value),
            Slot::Interfaces => {
                draft.interfaces = decode_types(value).map_err(|name| {
                    Error::configuration(
                        declared_type,
                        &annotation.kind,
                        format!("invalid interface type '{name}'"),
                    )
                })?;
            }
            Slot::Label => draft.label = value.as_text().map(str::to_string),
        }
        Ok(())
    }
}

fn decode_lifetime(value: &AnnotationValue) -> Lifetime {
    value
        .as_ordinal()
        .map_or_else(Lifetime::default, Lifetime::from_code)
}

fn decode_mode(value: &AnnotationValue) -> RegistrationMode {
    value
        .as_ordinal()
        .map_or_else(RegistrationMode::default, RegistrationMode::from_code)
}

/// Interface lists accept a type list or a single qualified name
fn decode_types(value: &AnnotationValue) -> std::result::Result<Vec<TypeRef>, String> {
    match value {
        AnnotationValue::Types(types) => Ok(types.clone()),
        AnnotationValue::Text(name) => TypeRef::parse(name)
            .map(|ty| vec![ty])
            .map_err(|_| name.clone()),
        AnnotationValue::Null | AnnotationValue::Ordinal(_) => Ok(Vec::new()),
    }
}
