//! Value objects
//!
//! Immutable data carried through a registration pass.

pub mod annotation;
pub mod declared_type;
pub mod document;
pub mod kind_registry;
pub mod lifetime;
pub mod registration;
pub mod type_ref;

pub use annotation::{
    AnnotationKind, AnnotationValue, CanonicalAnnotation, NamedArgument, RawAnnotation,
    normalize_kind_tag, normalize_label,
};
pub use declared_type::DeclaredType;
pub use document::{Binding, OutputDocument, RegistrationGroup, VariantBlock};
pub use kind_registry::{KindEntry, KindRegistry};
pub use lifetime::{Lifetime, RegistrationMode};
pub use registration::PendingRegistration;
pub use type_ref::TypeRef;
