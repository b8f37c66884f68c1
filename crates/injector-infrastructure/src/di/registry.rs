//! Rule registry
//!
//! Stores rules under their composite [`RuleKey`] and answers fallback
//! lookups. Guarded by its own `RwLock`: lookups and enumeration share the
//! lock, mutations take it exclusively.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use injector_domain::error::Result;
use injector_domain::{Rule, RuleId, RuleKey, TypeKey};
use itertools::Itertools;

use crate::locks::{lock_rwlock_read, lock_rwlock_write};

/// Thread-safe rule storage
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: RwLock<HashMap<RuleKey, Arc<Rule>>>,
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule under its own key, replacing any previous rule there
    pub fn add(&self, rule: Rule) -> Result<()> {
        let mut rules = lock_rwlock_write(&self.rules, "RuleRegistry::add")?;
        rules.insert(rule.key(), Arc::new(rule));
        Ok(())
    }

    /// Insert every rule, optionally dropping all existing rules first
    ///
    /// The whole batch is applied under one write lock, so concurrent readers
    /// see either the old or the new configuration.
    pub fn configure<I>(&self, rules: I, replace: bool) -> Result<()>
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut current = lock_rwlock_write(&self.rules, "RuleRegistry::configure")?;
        if replace {
            current.clear();
        }
        for rule in rules {
            current.insert(rule.key(), Arc::new(rule));
        }
        Ok(())
    }

    /// Remove every rule
    pub fn reset(&self) -> Result<()> {
        lock_rwlock_write(&self.rules, "RuleRegistry::reset")?.clear();
        Ok(())
    }

    /// Best matching rule for a request key, walking
    /// [`RuleKey::fallback_chain`]
    pub fn find(&self, key: &RuleKey) -> Result<Option<Arc<Rule>>> {
        let rules = lock_rwlock_read(&self.rules, "RuleRegistry::find")?;
        Ok(key
            .fallback_chain()
            .iter()
            .find_map(|candidate| rules.get(candidate).cloned()))
    }

    /// Rule stored exactly under `key`, without fallback
    pub fn get(&self, key: &RuleKey) -> Result<Option<Arc<Rule>>> {
        let rules = lock_rwlock_read(&self.rules, "RuleRegistry::get")?;
        Ok(rules.get(key).cloned())
    }

    /// Parameter types accepted by rules for `capability` that would serve
    /// `destination`, sorted by name
    ///
    /// Used to tell a missing or mistyped parameter apart from a capability
    /// that has no applicable rule at all.
    pub fn parameter_types(
        &self,
        capability: TypeKey,
        destination: TypeKey,
    ) -> Result<Vec<TypeKey>> {
        let rules = lock_rwlock_read(&self.rules, "RuleRegistry::parameter_types")?;
        Ok(rules
            .keys()
            .filter(|key| key.capability == capability && !key.parameter.is_any())
            .filter(|key| key.accepts_destination(destination))
            .map(|key| key.parameter)
            .sorted()
            .dedup()
            .collect())
    }

    /// Snapshot of every rule ordered by capability, then parameter, then
    /// destination name
    ///
    /// Each call takes a fresh snapshot, so the result reflects the state at
    /// call time and is unaffected by later mutations.
    pub fn enumerate(&self) -> Result<std::vec::IntoIter<Arc<Rule>>> {
        let rules = lock_rwlock_read(&self.rules, "RuleRegistry::enumerate")?;
        Ok(rules
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, rule)| Arc::clone(rule))
            .collect::<Vec<_>>()
            .into_iter())
    }

    /// Ids of every registered rule
    pub fn rule_ids(&self) -> Result<HashSet<RuleId>> {
        let rules = lock_rwlock_read(&self.rules, "RuleRegistry::rule_ids")?;
        Ok(rules.values().map(|rule| rule.id()).collect())
    }

    /// Number of registered rules
    pub fn len(&self) -> Result<usize> {
        Ok(lock_rwlock_read(&self.rules, "RuleRegistry::len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Whether a rule is stored exactly under `key`
    pub fn contains(&self, key: &RuleKey) -> Result<bool> {
        Ok(lock_rwlock_read(&self.rules, "RuleRegistry::contains")?.contains_key(key))
    }
}
