//! Reset, reconfiguration and parameters through the facade

use std::sync::Arc;

use injector::prelude::*;

#[derive(Debug)]
struct Connection {
    url: String,
}

fn connection_rule() -> Rule {
    Rule::builder::<Connection>().factory_with(|url: &String| {
        Ok(Arc::new(Connection { url: url.clone() }))
    })
}

#[test]
fn test_reset_then_inject_is_undefined() {
    let injector = Injector::new();
    injector.configure([connection_rule()]).unwrap();
    injector.reset().unwrap();

    let result = injector.inject_with::<Connection, _>(String::from("db://a"));
    assert!(matches!(result, Err(Error::UndefinedInjection { .. })));
}

#[test]
fn test_reconfigure_after_reset_uses_new_factory() {
    let injector = Injector::new();
    injector
        .configure([Rule::singleton::<String, _>(|| Ok(Arc::new("before".to_string())))])
        .unwrap();
    assert_eq!(*injector.inject::<String>().unwrap(), "before");

    injector.reset().unwrap();
    injector
        .configure([Rule::singleton::<String, _>(|| Ok(Arc::new("after".to_string())))])
        .unwrap();

    assert_eq!(*injector.inject::<String>().unwrap(), "after");
}

#[test]
fn test_parameter_scenarios() {
    let injector = Injector::new();
    injector.configure([connection_rule()]).unwrap();

    assert!(matches!(
        injector.inject::<Connection>(),
        Err(Error::ParameterCasting { .. })
    ));
    assert!(matches!(
        injector.inject_with::<Connection, _>(5432u16),
        Err(Error::ParameterCasting { .. })
    ));

    let connection = injector
        .inject_with::<Connection, _>(String::from("db://primary"))
        .unwrap();
    assert_eq!(connection.url, "db://primary");
}

#[test]
fn test_request_object() {
    struct Migrator;

    let injector = Injector::new();
    injector.configure([connection_rule()]).unwrap();

    let request = InjectionRequest::new()
        .with_parameter(String::from("db://migrations"))
        .for_destination::<Migrator>();
    let connection: Arc<Connection> = injector.inject_request(&request).unwrap();

    assert_eq!(connection.url, "db://migrations");
    assert_eq!(request.destination(), TypeKey::of::<Migrator>());
}

#[test]
fn test_settings_from_config() {
    let mut config = injector::InjectorConfig::default();
    config.settings.configure_replaces = false;

    let injector = Injector::from_config(&config);
    injector.configure([connection_rule()]).unwrap();
    injector
        .configure([Rule::new::<String, _>(|| Ok(Arc::new(String::from("kept"))))])
        .unwrap();

    assert_eq!(injector.rules().unwrap().count(), 2);
}
