//! Configuration report

use std::fmt;

use injector_domain::RuleDescriptor;
use injector_domain::error::Result;
use serde::Serialize;

use crate::error_ext::ErrorContext;

/// Snapshot of the registered rules for display or export
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationReport {
    #[serde(skip)]
    lines: Vec<String>,
    rules: Vec<RuleDescriptor>,
}

impl ConfigurationReport {
    pub(crate) fn new(lines: Vec<String>, rules: Vec<RuleDescriptor>) -> Self {
        Self { lines, rules }
    }

    /// One rendered line per rule, in registry order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn rules(&self) -> &[RuleDescriptor] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Pretty-printed JSON of the rule descriptors
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).internal_context("Failed to serialize configuration")
    }
}

impl fmt::Display for ConfigurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configured injection rules:")?;
        writeln!(f)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
