//! Rule presets

use crate::value_objects::Rule;

/// A named bundle of rules handed to the injector in one call
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use injector_domain::{Rule, RulePreset};
///
/// struct Defaults;
///
/// impl RulePreset for Defaults {
///     fn rules(&self) -> Vec<Rule> {
///         vec![Rule::builder::<String>().instance(Arc::new(String::from("default")))]
///     }
/// }
///
/// assert_eq!(Defaults.rules().len(), 1);
/// ```
pub trait RulePreset {
    /// Rules to be registered
    fn rules(&self) -> Vec<Rule>;
}

impl RulePreset for Vec<Rule> {
    fn rules(&self) -> Vec<Rule> {
        self.clone()
    }
}
