//! # Injector Infrastructure
//!
//! Runtime side of the injector: the rule registry, the singleton cache and
//! the resolution engine, plus configuration loading and logging setup.
//!
//! - [`di`] - [`Injector`](di::Injector), [`RuleRegistry`](di::RuleRegistry),
//!   [`SingletonCache`](di::SingletonCache)
//! - [`config`] - [`InjectorConfig`](config::InjectorConfig) and its Figment loader
//! - [`logging`] - `tracing-subscriber` initialization
//! - [`locks`] - poisoning-aware `RwLock` helpers
//! - [`error_ext`] - context helpers for foreign errors

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod locks;
pub mod logging;

pub use config::{ConfigLoader, InjectorConfig, InjectorSettings, LoggingConfig};
pub use di::{ConfigurationReport, InjectionRequest, Injector, RuleRegistry, SingletonCache};
