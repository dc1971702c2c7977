//! Unit tests for the generation pass driver

use std::sync::Arc;

use crate::common::{clock, ordinal, ty, weather_service};
use skanr_application::dialects::CSharpDialect;
use skanr_application::{
    CollectingSink, EmitterOptions, GenerationPass, InvalidAnnotationPolicy, PassInput,
    PassOptions, SourceEmitter,
};
use skanr_domain::{DeclaredType, Error, KindRegistry, Lifetime, RawAnnotation, Severity};

fn pass() -> GenerationPass {
    GenerationPass::new(SourceEmitter::new(
        Arc::new(CSharpDialect),
        EmitterOptions::new("Sample.App"),
    ))
}

#[test]
fn test_full_pass_reports_and_emits() {
    let input = PassInput::new("Sample.App", vec![weather_service(), clock()]);
    let mut sink = CollectingSink::new();

    let outcome = pass().run(&input, &mut sink).expect("pass should succeed");

    assert_eq!(sink.codes(), vec!["START", "FOUND", "FOUND", "GENERATED"]);
    assert_eq!(outcome.registrations.len(), 4);
    let document = outcome.document.expect("document should be produced");
    assert_eq!(document.groups.len(), 2);
    assert!(document.text.contains(
        "    #if DEBUG\n        services.AddSingleton<IFirstInterface, WeatherService>();\n    #endif\n"
    ));
}

#[test]
fn test_missing_base_kind_aborts_without_output() {
    let input = PassInput::new("Sample.App", vec![weather_service()]).with_kinds(None);
    let mut sink = CollectingSink::new();

    let error = pass().run(&input, &mut sink).expect_err("pass should fail");

    assert!(matches!(error, Error::MissingBaseKind { .. }));
    assert_eq!(sink.codes(), vec!["START", "MISSING_BASE_KIND"]);
    assert_eq!(sink.max_severity(), Some(Severity::Fatal));
}

#[test]
fn test_no_annotations_is_empty_result() {
    let input = PassInput::new("Sample.App", vec![DeclaredType::new(ty("Sample.App.Plain"))]);
    let mut sink = CollectingSink::new();

    let outcome = pass().run(&input, &mut sink).expect("pass should succeed");

    assert!(outcome.document.is_none());
    assert!(outcome.registrations.is_empty());
    assert_eq!(sink.codes(), vec!["START", "EMPTY_RESULT"]);
    assert!(!sink.has_failures());
}

#[test]
fn test_unrelated_annotations_are_ignored() {
    let declared = DeclaredType::new(ty("Sample.App.Dto"))
        .with_annotation(RawAnnotation::new("Serializable"))
        .with_annotation(RawAnnotation::new("Obsolete"));
    let input = PassInput::new("Sample.App", vec![declared]);
    let mut sink = CollectingSink::new();

    let outcome = pass().run(&input, &mut sink).expect("pass should succeed");

    assert!(outcome.document.is_none());
    assert!(!sink.codes().contains(&"FOUND"));
}

#[test]
fn test_multiple_annotations_accumulate_in_order() {
    let declared = DeclaredType::new(ty("App.T"))
        .implementing(ty("App.A"))
        .implementing(ty("App.B"))
        .with_annotation(
            RawAnnotation::new("Injectable")
                .with_positional(ordinal(1))
                .with_positional(ordinal(3)),
        )
        .with_annotation(RawAnnotation::new("TransientService").with_positional(ordinal(2)));
    let input = PassInput::new("App", vec![declared]);

    let outcome = pass()
        .run(&input, &mut CollectingSink::new())
        .expect("pass should succeed");

    let bindings: Vec<(String, Lifetime)> = outcome
        .registrations
        .iter()
        .map(|r| (r.service_type.qualified_name(), r.lifetime))
        .collect();
    assert_eq!(
        bindings,
        vec![
            ("App.T".to_string(), Lifetime::Scoped),
            ("App.A".to_string(), Lifetime::Transient),
            ("App.B".to_string(), Lifetime::Transient),
        ]
    );
}

#[test]
fn test_invalid_annotation_aborts_by_default() {
    let registry = KindRegistry::from_visible(
        ["Injectable", "TransientService"],
        ["PooledService"],
    );
    let declared = DeclaredType::new(ty("App.Pool"))
        .with_annotation(RawAnnotation::new("PooledService"));
    let input = PassInput::new("App", vec![declared, clock()]).with_kinds(registry);
    let mut sink = CollectingSink::new();

    let error = pass().run(&input, &mut sink).expect_err("pass should fail");

    assert!(matches!(error, Error::Configuration { .. }));
    assert_eq!(sink.codes(), vec!["START", "FOUND", "INVALID_ANNOTATION"]);
    assert_eq!(sink.diagnostics()[2].subject(), Some("App.Pool"));
}

#[test]
fn test_invalid_annotation_skipped_when_configured() {
    let registry = KindRegistry::from_visible(
        ["Injectable", "TransientService"],
        ["PooledService"],
    );
    let declared = DeclaredType::new(ty("App.Pool"))
        .with_annotation(RawAnnotation::new("PooledService"))
        .with_annotation(RawAnnotation::new("TransientService"));
    let input = PassInput::new("App", vec![declared]).with_kinds(registry);
    let mut sink = CollectingSink::new();
    let options = PassOptions {
        on_invalid_annotation: InvalidAnnotationPolicy::Skip,
        ..PassOptions::default()
    };

    let outcome = pass()
        .with_options(options)
        .run(&input, &mut sink)
        .expect("pass should succeed");

    assert_eq!(outcome.registrations.len(), 1);
    assert!(sink.has_failures());
    assert_eq!(
        sink.codes(),
        vec!["START", "FOUND", "INVALID_ANNOTATION", "GENERATED"]
    );
}

#[test]
fn test_passes_are_byte_identical() {
    let input = PassInput::new("Sample.App", vec![weather_service(), clock()]);

    let first = pass()
        .run(&input, &mut CollectingSink::new())
        .expect("pass should succeed");
    let second = pass()
        .run(&input, &mut CollectingSink::new())
        .expect("pass should succeed");

    assert_eq!(
        first.document.map(|d| d.text),
        second.document.map(|d| d.text)
    );
}

#[test]
fn test_plan_skips_emission() {
    let input = PassInput::new("Sample.App", vec![clock()]);
    let mut sink = CollectingSink::new();

    let registrations = pass().plan(&input, &mut sink).expect("plan should succeed");

    assert_eq!(registrations.len(), 1);
    assert!(registrations[0].is_self_binding());
    assert_eq!(sink.codes(), vec!["START", "FOUND"]);
}
