//! Logging Tests

use std::io;
use std::sync::{Arc, Mutex};

use injector_domain::Rule;
use injector_infrastructure::constants::DEFAULT_LOG_LEVEL;
use injector_infrastructure::logging::{LoggingConfig, parse_log_level};
use injector_infrastructure::{Injector, InjectorSettings};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::test_utils::*;

/// In-memory writer collecting formatted events
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_success_and_failure_are_logged() {
    let injector = Injector::new();
    injector.add(Rule::new::<dyn Service, _>(|| Ok(service("logged")))).unwrap();

    let output = capture(|| {
        let _: Arc<dyn Service> = injector.inject().unwrap();
        let _ = injector.inject::<dyn Unregistered>();
    });

    assert!(output.contains("Successfully injected"), "{output}");
    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("Didn't find any rule suitable"), "{output}");
    assert!(output.contains("ERROR"), "{output}");
}

#[test]
fn test_success_names_declared_concrete_type() {
    let injector = Injector::new();
    injector
        .configure([
            Rule::builder::<dyn Service>()
                .meta::<NamedService>()
                .factory(|| Ok(service("declared"))),
            Rule::new::<String, _>(|| Ok(Arc::new(String::from("plain")))),
        ])
        .unwrap();

    let declared = capture(|| {
        let _: Arc<dyn Service> = injector.inject().unwrap();
    });
    assert!(declared.contains(" with "), "{declared}");
    assert!(declared.contains("NamedService"), "{declared}");

    let plain = capture(|| {
        let _ = injector.inject::<String>().unwrap();
    });
    assert!(plain.contains("Successfully injected"), "{plain}");
    assert!(!plain.contains(" with "), "{plain}");
}

#[test]
fn test_cached_resolution_is_logged_as_restored() {
    let injector = Injector::new();
    injector.add(Rule::singleton::<dyn Service, _>(|| Ok(service("cached")))).unwrap();

    let output = capture(|| {
        let _: Arc<dyn Service> = injector.inject().unwrap();
        let _: Arc<dyn Service> = injector.inject().unwrap();
    });

    assert!(output.contains("Successfully injected"), "{output}");
    assert!(output.contains("Restored cached"), "{output}");
}

#[test]
fn test_casting_failure_is_logged() {
    let injector = Injector::new();
    injector
        .add(Rule::builder::<dyn Service>().factory_with(|n: &String| Ok(service(n))))
        .unwrap();

    let output = capture(|| {
        let _ = injector.inject::<dyn Service>();
    });

    assert!(output.contains("Failed to cast parameter"), "{output}");
    assert!(output.contains("nothing"), "{output}");
}

#[test]
fn test_debug_logging_toggle() {
    let injector = Injector::with_settings(InjectorSettings {
        debug_logging: false,
        ..InjectorSettings::default()
    });
    injector.add(Rule::new::<dyn Service, _>(|| Ok(service("quiet")))).unwrap();
    assert!(!injector.is_debug_logging_enabled());

    let silent = capture(|| {
        let _: Arc<dyn Service> = injector.inject().unwrap();
        let _ = injector.inject::<dyn Unregistered>();
    });
    assert!(silent.is_empty(), "{silent}");

    injector.set_debug_logging(true);
    let loud = capture(|| {
        let _: Arc<dyn Service> = injector.inject().unwrap();
    });
    assert!(loud.contains("Successfully injected"), "{loud}");
}

#[test]
fn test_print_configuration_logs_rules() {
    let injector = Injector::new();
    injector
        .configure([
            Rule::new::<dyn Service, _>(|| Ok(service("a"))),
            Rule::new::<String, _>(|| Ok(Arc::new(String::new()))),
        ])
        .unwrap();

    let output = capture(|| injector.print_configuration().unwrap());

    assert!(output.contains("Configured injection rules"), "{output}");
    assert!(output.contains("Service"), "{output}");
    assert!(output.contains("String"), "{output}");
}
