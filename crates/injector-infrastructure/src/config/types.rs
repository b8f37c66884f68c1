//! Configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InjectorConfig {
    /// Resolution behaviour
    #[serde(default)]
    pub settings: InjectorSettings,

    /// Logging subscriber setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Behaviour switches of the injector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InjectorSettings {
    /// Emit a tracing event for every resolution attempt
    pub debug_logging: bool,

    /// `reset` also drops cached singletons
    pub reset_clears_cache: bool,

    /// `configure` removes previously registered rules before adding
    pub configure_replaces: bool,
}

impl Default for InjectorSettings {
    fn default() -> Self {
        Self {
            debug_logging: DEFAULT_DEBUG_LOGGING,
            reset_clears_cache: DEFAULT_RESET_CLEARS_CACHE,
            configure_replaces: DEFAULT_CONFIGURE_REPLACES,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rotated file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
