//! # Injector
//!
//! Rule-based dependency injection. Application code asks for an
//! implementation of a capability (usually a trait object) and the injector
//! picks a factory from a set of registered rules, optionally taking into
//! account a runtime parameter and the type of the object the dependency is
//! destined for.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use injector::prelude::*;
//!
//! trait Logger: Send + Sync {
//!     fn prefix(&self) -> &'static str;
//! }
//!
//! struct ConsoleLogger;
//! struct FileLogger;
//! struct ReportModule;
//!
//! impl Logger for ConsoleLogger {
//!     fn prefix(&self) -> &'static str { "console" }
//! }
//!
//! impl Logger for FileLogger {
//!     fn prefix(&self) -> &'static str { "file" }
//! }
//!
//! let injector = Injector::new();
//! injector.configure([
//!     Rule::new::<dyn Logger, _>(|| Ok(Arc::new(ConsoleLogger) as Arc<dyn Logger>)),
//!     Rule::builder::<dyn Logger>()
//!         .for_destination::<ReportModule>()
//!         .factory(|| Ok(Arc::new(FileLogger) as Arc<dyn Logger>)),
//! ])?;
//!
//! let default: Arc<dyn Logger> = injector.inject()?;
//! let for_reports: Arc<dyn Logger> = injector.inject_for::<dyn Logger, ReportModule>()?;
//!
//! assert_eq!(default.prefix(), "console");
//! assert_eq!(for_reports.prefix(), "file");
//! # Ok::<(), injector::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - type keys, rules, factories, presets and the error type
//! - `infrastructure` - registry, singleton cache, resolution engine,
//!   configuration loading and logging setup

/// Domain layer - rules, keys and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use injector_domain::*;
}

/// Infrastructure layer - resolution engine, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use injector_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine and its settings at the crate root
pub use infrastructure::{
    ConfigLoader, ConfigurationReport, InjectionRequest, Injector, InjectorConfig,
    InjectorSettings,
};

/// Everything needed to declare rules and resolve dependencies
pub mod prelude {
    pub use injector_domain::{Error, Parameter, Result, Rule, RulePreset, TypeKey};
    pub use injector_infrastructure::{InjectionRequest, Injector, InjectorSettings};
}
