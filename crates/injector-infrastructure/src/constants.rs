//! Infrastructure layer constants
//!
//! Domain-level constants are defined in `injector_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "injector.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "injector";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INJECTOR";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "INJECTOR_LOG";

/// Default log file stem when file output has no stem
pub const DEFAULT_LOG_FILE_STEM: &str = "injector";

// ============================================================================
// RESOLUTION DEFAULTS
// ============================================================================

/// Whether resolution events are logged unless configured otherwise
pub const DEFAULT_DEBUG_LOGGING: bool = true;

/// Whether `reset` drops cached singletons along with the rules
pub const DEFAULT_RESET_CLEARS_CACHE: bool = true;

/// Whether `configure` drops previously registered rules first
pub const DEFAULT_CONFIGURE_REPLACES: bool = true;
