//! Construction logic behind a rule

use crate::error::Result;
use crate::value_objects::{Instance, Parameter};

/// Produces instances for a rule
///
/// Any `Fn(Option<&Parameter>) -> Result<Instance>` closure is a factory.
/// Implement the trait directly when the construction logic carries its own
/// state or needs a name in diagnostics.
///
/// A factory is called without any injector lock held, so it may resolve
/// other capabilities from the same injector.
pub trait Factory: Send + Sync {
    /// Build a new instance, optionally from the request's parameter
    fn produce(&self, parameter: Option<&Parameter>) -> Result<Instance>;
}

impl<F> Factory for F
where
    F: Fn(Option<&Parameter>) -> Result<Instance> + Send + Sync,
{
    fn produce(&self, parameter: Option<&Parameter>) -> Result<Instance> {
        self(parameter)
    }
}
