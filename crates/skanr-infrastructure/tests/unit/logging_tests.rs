//! Tests for logging setup

use skanr_infrastructure::LoggingConfig;
use skanr_infrastructure::logging::{log_filter, parse_log_level};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, layer::SubscriberExt};

fn config_with_level(level: &str) -> LoggingConfig {
    LoggingConfig {
        level: level.to_string(),
        ..LoggingConfig::default()
    }
}

#[test]
fn test_parse_log_level_variants() {
    assert_eq!(parse_log_level("trace").expect("valid level"), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").expect("valid level"), Level::DEBUG);
    assert_eq!(parse_log_level(" info ").expect("valid level"), Level::INFO);
    assert_eq!(parse_log_level("warning").expect("valid level"), Level::WARN);
    assert_eq!(parse_log_level("error").expect("valid level"), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let error = parse_log_level("verbose").expect_err("invalid level");

    assert!(error.to_string().contains("verbose"));
}

#[test]
fn test_log_filter_uses_parsed_level() {
    let filter = log_filter(&config_with_level(" Warning ")).expect("filter should build");

    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn test_warning_level_keeps_warnings_enabled() {
    let filter = log_filter(&config_with_level("warning")).expect("filter should build");
    let subscriber = Registry::default().with(filter);

    tracing::subscriber::with_default(subscriber, || {
        assert!(tracing::enabled!(Level::ERROR));
        assert!(tracing::enabled!(Level::WARN));
        assert!(!tracing::enabled!(Level::INFO));
    });
}

#[test]
fn test_log_filter_rejects_unknown_level() {
    assert!(log_filter(&config_with_level("loud")).is_err());
}
