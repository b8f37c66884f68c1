//! Domain layer constants
//!
//! Infrastructure-specific constants (config file names, env prefixes)
//! are in `injector_infrastructure::constants`.

/// Display name of the wildcard [`TypeKey::ANY`](crate::TypeKey::ANY)
pub const ANY_TYPE_NAME: &str = "Any";

/// Display name used in diagnostics when no parameter was supplied
pub const NO_PARAMETER: &str = "nothing";

/// Tracing target used by every event the injector emits
pub const LOG_TARGET: &str = "injector";
