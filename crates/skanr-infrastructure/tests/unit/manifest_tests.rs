//! Tests for host manifest loading

use std::fs;

use skanr_domain::{AnnotationValue, Error, TypeRef};
use skanr_infrastructure::{HostManifest, ManifestFormat};

const JSON_MANIFEST: &str = r#"{
  "unit": "Sample.App",
  "types": [
    { "name": "Sample.App.WeatherService",
      "implements": ["Sample.App.IFirstInterface", "Sample.App.ISecondInterface"],
      "annotations": [
        { "kind": "TransientService", "positional": [2] },
        { "kind": "TransientService", "named": [{ "name": "PreprocessorLabel", "value": "DEBUG" }] }
      ] }
  ]
}"#;

const YAML_MANIFEST: &str = r"
unit: Sample.App
annotation_kinds: [Injectable, ScopedService]
derived_kinds: [PooledService]
types:
  - name: Sample.App.Cache
    annotations:
      - kind: ScopedService
        positional: [4, [Sample.App.ICache, Sample.Contracts.IStore]]
";

const TOML_MANIFEST: &str = r#"
unit = "Sample.App"

[[types]]
name = "Sample.App.Clock"

[[types.annotations]]
kind = "Injectable"
positional = [0, 3]
"#;

#[test]
fn test_json_manifest_with_default_kinds() {
    let manifest =
        HostManifest::parse(JSON_MANIFEST, ManifestFormat::Json).expect("manifest should parse");

    assert_eq!(manifest.unit, "Sample.App");
    assert_eq!(
        manifest.annotation_kinds,
        vec!["Injectable", "TransientService", "ScopedService", "SingletonService"]
    );
    let weather = &manifest.types[0];
    assert_eq!(weather.implements.len(), 2);
    assert_eq!(weather.annotations[0].positional, vec![AnnotationValue::Ordinal(2)]);
    assert_eq!(
        weather.annotations[1].named[0].value,
        AnnotationValue::Text("DEBUG".to_string())
    );
}

#[test]
fn test_yaml_manifest_with_type_lists_and_derived_kinds() {
    let manifest =
        HostManifest::parse(YAML_MANIFEST, ManifestFormat::Yaml).expect("manifest should parse");

    let positional = &manifest.types[0].annotations[0].positional;
    assert_eq!(positional[0], AnnotationValue::Ordinal(4));
    assert_eq!(
        positional[1],
        AnnotationValue::Types(vec![
            TypeRef::new("Sample.App", "ICache"),
            TypeRef::new("Sample.Contracts", "IStore"),
        ])
    );

    let registry = manifest.kind_registry().expect("registry should build");
    assert!(registry.recognizes("PooledService"));
    assert!(!registry.recognizes("TransientService"));
}

#[test]
fn test_toml_manifest() {
    let manifest =
        HostManifest::parse(TOML_MANIFEST, ManifestFormat::Toml).expect("manifest should parse");

    assert_eq!(manifest.types[0].name, TypeRef::new("Sample.App", "Clock"));
    assert_eq!(manifest.types[0].annotations[0].positional.len(), 2);
}

#[test]
fn test_base_kind_missing_yields_no_registry() {
    let manifest = HostManifest::parse(
        r#"{ "unit": "App", "annotation_kinds": ["TransientService"] }"#,
        ManifestFormat::Json,
    )
    .expect("manifest should parse");

    assert!(manifest.kind_registry().is_none());
    assert!(manifest.into_pass_input().kinds.is_none());
}

#[test]
fn test_invalid_type_name_is_manifest_error() {
    let error = HostManifest::parse(
        r#"{ "unit": "App", "types": [{ "name": "App." }] }"#,
        ManifestFormat::Json,
    )
    .expect_err("manifest should fail");

    assert!(matches!(error, Error::Manifest { .. }));
}

#[test]
fn test_from_path_detects_format() {
    let dir = tempfile::tempdir().expect("tempdir should succeed");
    let path = dir.path().join("types.YML");
    fs::write(&path, YAML_MANIFEST).expect("write should succeed");

    let input = HostManifest::from_path(&path)
        .expect("manifest should load")
        .into_pass_input();

    assert_eq!(input.unit, "Sample.App");
    assert_eq!(input.declared_types.len(), 1);
    assert!(input.kinds.is_some());
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let error = ManifestFormat::from_path(std::path::Path::new("types.xml"))
        .expect_err("xml should be rejected");

    assert!(error.to_string().contains("types.xml"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir should succeed");

    let error = HostManifest::from_path(&dir.path().join("absent.json"))
        .expect_err("missing file should fail");

    assert!(matches!(error, Error::Io { .. }));
}
