//! Shared fixtures

use skanr_domain::{
    AnnotationValue, DeclaredType, Lifetime, PendingRegistration, RawAnnotation, TypeRef,
};

pub fn ty(qualified: &str) -> TypeRef {
    TypeRef::parse(qualified).expect("type name should parse")
}

pub fn ordinal(code: i64) -> AnnotationValue {
    AnnotationValue::Ordinal(code)
}

pub fn registration(
    group: &str,
    label: Option<&str>,
    service: &str,
    implementation: &str,
    lifetime: Lifetime,
) -> PendingRegistration {
    PendingRegistration {
        group_name: group.to_string(),
        label: label.map(str::to_string),
        service_type: ty(service),
        implementation_type: ty(implementation),
        lifetime,
    }
}

/// `WeatherService` implementing two contracts in two namespaces, bound for
/// all interfaces and again under a `DEBUG` label
pub fn weather_service() -> DeclaredType {
    DeclaredType::new(ty("Sample.App.WeatherService"))
        .implementing(ty("Sample.App.IFirstInterface"))
        .implementing(ty("Sample.Contracts.ISecondInterface"))
        .with_annotation(RawAnnotation::new("TransientService").with_positional(ordinal(2)))
        .with_annotation(
            RawAnnotation::new("SingletonService").with_named("PreprocessorLabel", "DEBUG"),
        )
}

/// `Clock` with no contracts, bound to itself as a singleton
pub fn clock() -> DeclaredType {
    DeclaredType::new(ty("Sample.App.Clock")).with_annotation(
        RawAnnotation::new("Injectable")
            .with_positional(ordinal(0))
            .with_positional(ordinal(3)),
    )
}
