//! Error handling types

use thiserror::Error;

use crate::value_objects::TypeKey;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the injector
#[derive(Error, Debug)]
pub enum Error {
    /// No rule matched the request, or the matched factory produced a value
    /// that is not an instance of the requested capability
    #[error(
        "Undefined injection of {capability} with parameter {parameter} for {destination}"
    )]
    UndefinedInjection {
        /// Requested capability
        capability: TypeKey,
        /// Runtime type of the supplied parameter (`Any` when none)
        parameter: TypeKey,
        /// Requested destination (`Any` when none)
        destination: TypeKey,
    },

    /// A rule requires a typed parameter and the caller supplied none or
    /// one of a different runtime type
    #[error("Parameter casting error while injecting {capability}: expected {expected}, got {actual}")]
    ParameterCasting {
        /// Capability being injected
        capability: TypeKey,
        /// Parameter type(s) the rule accepts
        expected: String,
        /// Parameter type actually supplied
        actual: String,
    },

    /// A rule could not be built from the supplied parts
    #[error("Invalid rule: {message}")]
    InvalidRule {
        /// Why the rule was rejected
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Injection error creation methods
impl Error {
    /// Create an undefined injection error for the given lookup triple
    pub fn undefined_injection(
        capability: TypeKey,
        parameter: TypeKey,
        destination: TypeKey,
    ) -> Self {
        Self::UndefinedInjection {
            capability,
            parameter,
            destination,
        }
    }

    /// Create a parameter casting error
    pub fn parameter_casting<E: Into<String>, A: Into<String>>(
        capability: TypeKey,
        expected: E,
        actual: A,
    ) -> Self {
        Self::ParameterCasting {
            capability,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid rule error
    pub fn invalid_rule<S: Into<String>>(message: S) -> Self {
        Self::InvalidRule {
            message: message.into(),
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error belongs to the injection taxonomy, as opposed to
    /// configuration or internal failures
    pub fn is_injection_error(&self) -> bool {
        matches!(
            self,
            Self::UndefinedInjection { .. } | Self::ParameterCasting { .. }
        )
    }
}
