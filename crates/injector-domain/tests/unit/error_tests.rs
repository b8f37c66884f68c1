//! Unit tests for domain error types

use injector_domain::{Error, TypeKey};

struct Capability;
struct Destination;

#[test]
fn test_undefined_injection_error() {
    let error = Error::undefined_injection(
        TypeKey::of::<Capability>(),
        TypeKey::ANY,
        TypeKey::of::<Destination>(),
    );

    match &error {
        Error::UndefinedInjection {
            capability,
            parameter,
            destination,
        } => {
            assert_eq!(*capability, TypeKey::of::<Capability>());
            assert!(parameter.is_any());
            assert_eq!(*destination, TypeKey::of::<Destination>());
        }
        _ => panic!("Expected UndefinedInjection error"),
    }

    let display = error.to_string();
    assert!(display.contains("Capability"));
    assert!(display.contains("with parameter Any"));
    assert!(display.contains("Destination"));
    assert!(error.is_injection_error());
}

#[test]
fn test_parameter_casting_error() {
    let error = Error::parameter_casting(TypeKey::of::<Capability>(), "u32", "nothing");

    match &error {
        Error::ParameterCasting {
            expected, actual, ..
        } => {
            assert_eq!(expected, "u32");
            assert_eq!(actual, "nothing");
        }
        _ => panic!("Expected ParameterCasting error"),
    }
    assert!(error.to_string().contains("expected u32, got nothing"));
    assert!(error.is_injection_error());
}

#[test]
fn test_ambient_errors_are_not_injection_errors() {
    assert!(!Error::internal("poisoned").is_injection_error());
    assert!(!Error::configuration("bad level").is_injection_error());
    assert!(!Error::invalid_rule("wildcard").is_injection_error());
}

#[test]
fn test_configuration_error_keeps_source() {
    use std::error::Error as _;

    let io = std::io::Error::other("disk");
    let error = Error::configuration_with_source("Failed to read config", io);

    assert!(error.to_string().contains("Failed to read config"));
    assert!(error.source().is_some());
}
