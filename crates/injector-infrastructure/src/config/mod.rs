//! Configuration
//!
//! [`InjectorConfig`] is loaded by [`ConfigLoader`] from defaults, an
//! optional TOML file and `INJECTOR__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{InjectorConfig, InjectorSettings, LoggingConfig};
