//! Unit tests for annotation value objects

use skanr_domain::{
    AnnotationKind, AnnotationValue, CanonicalAnnotation, Lifetime, RawAnnotation,
    RegistrationMode, TypeRef, normalize_kind_tag, normalize_label,
};

#[test]
fn test_lifetime_codes() {
    assert_eq!(Lifetime::from_code(0), Lifetime::Singleton);
    assert_eq!(Lifetime::from_code(1), Lifetime::Scoped);
    assert_eq!(Lifetime::from_code(2), Lifetime::Transient);
    assert_eq!(Lifetime::from_code(42), Lifetime::Transient);
    assert_eq!(Lifetime::from_code(-1), Lifetime::Transient);
}

#[test]
fn test_mode_codes() {
    assert_eq!(RegistrationMode::from_code(0), RegistrationMode::Auto);
    assert_eq!(RegistrationMode::from_code(1), RegistrationMode::FirstInterface);
    assert_eq!(RegistrationMode::from_code(2), RegistrationMode::AllInterfaces);
    assert_eq!(RegistrationMode::from_code(3), RegistrationMode::Instance);
    assert_eq!(RegistrationMode::from_code(4), RegistrationMode::Manual);
    assert_eq!(RegistrationMode::from_code(9), RegistrationMode::Auto);
}

#[test]
fn test_codes_are_stable() {
    for lifetime in [Lifetime::Singleton, Lifetime::Scoped, Lifetime::Transient] {
        assert_eq!(Lifetime::from_code(lifetime.code()), lifetime);
    }
    assert_eq!(RegistrationMode::Manual.code(), 4);
}

#[test]
fn test_kind_from_tag_accepts_suffix_and_namespace() {
    assert_eq!(
        AnnotationKind::from_tag("Skanr.Attributes.InjectableAttribute"),
        Some(AnnotationKind::Injectable)
    );
    assert_eq!(
        AnnotationKind::from_tag("ScopedService"),
        Some(AnnotationKind::ScopedService)
    );
    assert_eq!(AnnotationKind::from_tag("Obsolete"), None);
}

#[test]
fn test_normalize_kind_tag_keeps_bare_suffix() {
    assert_eq!(normalize_kind_tag("Attribute"), "Attribute");
    assert_eq!(normalize_kind_tag("TransientServiceAttribute"), "TransientService");
}

#[test]
fn test_implied_lifetimes() {
    assert_eq!(AnnotationKind::Injectable.implied_lifetime(), None);
    assert_eq!(
        AnnotationKind::TransientService.implied_lifetime(),
        Some(Lifetime::Transient)
    );
    assert_eq!(
        AnnotationKind::ScopedService.implied_lifetime(),
        Some(Lifetime::Scoped)
    );
    assert_eq!(
        AnnotationKind::SingletonService.implied_lifetime(),
        Some(Lifetime::Singleton)
    );
}

#[test]
fn test_blank_labels_are_absent() {
    assert_eq!(normalize_label(Some("   ".to_string())), None);
    assert_eq!(normalize_label(Some(String::new())), None);
    assert_eq!(normalize_label(Some("DEBUG".to_string())), Some("DEBUG".to_string()));

    let annotation =
        CanonicalAnnotation::new(Lifetime::Scoped, RegistrationMode::Auto).with_label("\t");
    assert_eq!(annotation.label, None);
}

#[test]
fn test_raw_annotation_deserializes_typed_values() {
    let json = r#"{
        "kind": "Injectable",
        "positional": [0, 4, ["A.IFoo", "B.IBar"], null],
        "named": [{ "name": "label", "value": "RELEASE" }]
    }"#;

    let annotation: RawAnnotation =
        serde_json::from_str(json).expect("deserialization should succeed");

    assert_eq!(annotation.kind, "Injectable");
    assert_eq!(annotation.positional[0], AnnotationValue::Ordinal(0));
    assert_eq!(annotation.positional[1], AnnotationValue::Ordinal(4));
    assert_eq!(
        annotation.positional[2],
        AnnotationValue::Types(vec![TypeRef::new("A", "IFoo"), TypeRef::new("B", "IBar")])
    );
    assert_eq!(annotation.positional[3], AnnotationValue::Null);
    assert_eq!(annotation.named[0].value.as_text(), Some("RELEASE"));
}

#[test]
fn test_raw_annotation_defaults_to_no_arguments() {
    let annotation: RawAnnotation = serde_json::from_str(r#"{ "kind": "SingletonService" }"#)
        .expect("deserialization should succeed");

    assert!(annotation.positional.is_empty());
    assert!(annotation.named.is_empty());
}
