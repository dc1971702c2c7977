//! Unit tests for type references

use skanr_domain::TypeRef;

#[test]
fn test_parse_qualified_name() {
    let ty = TypeRef::parse("Sample.App.IWeatherService").expect("parse should succeed");

    assert_eq!(ty.namespace(), "Sample.App");
    assert_eq!(ty.name(), "IWeatherService");
    assert!(!ty.is_global());
    assert_eq!(ty.qualified_name(), "Sample.App.IWeatherService");
}

#[test]
fn test_parse_global_name() {
    let ty = TypeRef::parse("Program").expect("parse should succeed");

    assert!(ty.is_global());
    assert_eq!(ty.namespace(), "");
    assert_eq!(ty.to_string(), "Program");
}

#[test]
fn test_parse_keeps_generic_arguments_in_name() {
    let ty = TypeRef::parse("Data.IRepository<Data.Models.Order>").expect("parse should succeed");

    assert_eq!(ty.namespace(), "Data");
    assert_eq!(ty.name(), "IRepository<Data.Models.Order>");
}

#[test]
fn test_parse_trims_whitespace() {
    let ty = TypeRef::parse("  A.B  ").expect("parse should succeed");
    assert_eq!(ty, TypeRef::new("A", "B"));
}

#[test]
fn test_parse_rejects_malformed_names() {
    for input in ["", "   ", "A.", "A..B", ".B", "<T>"] {
        assert!(TypeRef::parse(input).is_err(), "expected '{input}' to be rejected");
    }
}

#[test]
fn test_serde_uses_qualified_string() {
    let ty = TypeRef::new("Sample", "Service");
    let json = serde_json::to_string(&ty).expect("serialization should succeed");
    assert_eq!(json, "\"Sample.Service\"");

    let back: TypeRef = serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(back, ty);
}

#[test]
fn test_serde_rejects_invalid_name() {
    let result: Result<TypeRef, _> = serde_json::from_str("\"A..B\"");
    assert!(result.is_err());
}
