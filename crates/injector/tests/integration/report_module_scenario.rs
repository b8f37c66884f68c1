//! Destination-specific logger

use std::sync::Arc;

use injector::prelude::*;

trait Logger: Send + Sync {
    fn sink(&self) -> &'static str;
}

struct ConsoleLogger;
struct FileLogger;

impl Logger for ConsoleLogger {
    fn sink(&self) -> &'static str {
        "console"
    }
}

impl Logger for FileLogger {
    fn sink(&self) -> &'static str {
        "file"
    }
}

trait Module {
    fn name(&self) -> &'static str;
}

struct ReportModule;
struct SomeOtherModule;

impl Module for ReportModule {
    fn name(&self) -> &'static str {
        "reports"
    }
}

impl Module for SomeOtherModule {
    fn name(&self) -> &'static str {
        "other"
    }
}

/// Wires a logger into any module, keyed by the module's own type
fn logger_for<M: Module + 'static>(injector: &Injector, module: &M) -> Arc<dyn Logger> {
    assert!(!module.name().is_empty());
    injector.inject_for_instance(module).unwrap()
}

fn logger_injector() -> Injector {
    let injector = Injector::new();
    injector
        .configure([
            Rule::new::<dyn Logger, _>(|| Ok(Arc::new(ConsoleLogger) as Arc<dyn Logger>)),
            Rule::builder::<dyn Logger>()
                .for_destination::<ReportModule>()
                .factory(|| Ok(Arc::new(FileLogger) as Arc<dyn Logger>)),
        ])
        .unwrap();
    injector
}

#[test]
fn test_report_module_gets_its_logger() {
    let injector = logger_injector();
    let logger: Arc<dyn Logger> = injector.inject_for::<dyn Logger, ReportModule>().unwrap();
    assert_eq!(logger.sink(), "file");
}

#[test]
fn test_other_module_gets_default_logger() {
    let injector = logger_injector();
    let logger: Arc<dyn Logger> = injector.inject_for::<dyn Logger, SomeOtherModule>().unwrap();
    assert_eq!(logger.sink(), "console");
}

#[test]
fn test_module_instance_as_destination() {
    let injector = logger_injector();
    let module = ReportModule;

    let logger: Arc<dyn Logger> = injector.inject_for_instance(&module).unwrap();
    assert_eq!(logger.sink(), "file");

    let plain: Arc<dyn Logger> = injector.inject().unwrap();
    assert_eq!(plain.sink(), "console");
}

#[test]
fn test_boxed_module_resolves_by_its_own_type() {
    let injector = logger_injector();
    let module: Box<ReportModule> = Box::new(ReportModule);

    let logger: Arc<dyn Logger> = injector.inject_for_instance(&*module).unwrap();
    assert_eq!(logger.sink(), "file");
}

#[test]
fn test_generic_wiring_keys_on_concrete_module() {
    let injector = logger_injector();

    assert_eq!(logger_for(&injector, &ReportModule).sink(), "file");
    assert_eq!(logger_for(&injector, &SomeOtherModule).sink(), "console");
}

#[test]
fn test_report_lists_both_logger_rules() {
    let report = logger_injector().configuration().unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.lines().iter().any(|line| line.contains("ReportModule")));
}
