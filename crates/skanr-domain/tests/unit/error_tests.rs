//! Unit tests for the domain error type

use skanr_domain::Error;

#[test]
fn test_configuration_error_names_type_and_kind() {
    let error = Error::configuration("App.Service", "PooledService", "unsupported annotation kind");
    let message = error.to_string();

    assert!(message.contains("App.Service"));
    assert!(message.contains("PooledService"));
    assert!(!error.is_fatal());
}

#[test]
fn test_missing_base_kind_is_fatal() {
    let error = Error::missing_base_kind("Injectable");

    assert!(error.is_fatal());
    assert!(error.to_string().contains("Injectable"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: Error = io.into();

    assert!(matches!(error, Error::IoSimple { .. }));
}
