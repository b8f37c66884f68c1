//! Singleton cache
//!
//! Same key shape as the rule registry. Each entry remembers the rule that
//! produced it; a lookup only accepts entries produced by the rule selected
//! for the current request.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use injector_domain::error::Result;
use injector_domain::{Instance, RuleId, RuleKey};

use crate::locks::{lock_rwlock_read, lock_rwlock_write};

/// A cached singleton and the rule it came from
#[derive(Clone)]
pub struct CachedInstance {
    pub rule: RuleId,
    pub instance: Instance,
}

/// Thread-safe singleton storage
#[derive(Default)]
pub struct SingletonCache {
    entries: RwLock<HashMap<RuleKey, CachedInstance>>,
}

impl SingletonCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached instance for `key`, walking the same fallback chain as rule
    /// lookups but skipping entries produced by any rule other than `rule`
    pub fn get(&self, key: &RuleKey, rule: RuleId) -> Result<Option<Instance>> {
        let entries = lock_rwlock_read(&self.entries, "SingletonCache::get")?;
        Ok(key.fallback_chain().iter().find_map(|candidate| {
            entries
                .get(candidate)
                .filter(|cached| cached.rule == rule)
                .map(|cached| cached.instance.clone())
        }))
    }

    /// Store an instance under the exact request key
    ///
    /// Overwrites whatever is there; when two threads race on the same key
    /// the last store wins.
    pub fn store(&self, key: RuleKey, rule: RuleId, instance: Instance) -> Result<()> {
        let mut entries = lock_rwlock_write(&self.entries, "SingletonCache::store")?;
        entries.insert(key, CachedInstance { rule, instance });
        Ok(())
    }

    /// Drop entries produced by rules not in `live`, returning how many went
    pub fn retain_rules(&self, live: &HashSet<RuleId>) -> Result<usize> {
        let mut entries = lock_rwlock_write(&self.entries, "SingletonCache::retain_rules")?;
        let before = entries.len();
        entries.retain(|_, cached| live.contains(&cached.rule));
        Ok(before - entries.len())
    }

    pub fn clear(&self) -> Result<()> {
        lock_rwlock_write(&self.entries, "SingletonCache::clear")?.clear();
        Ok(())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(lock_rwlock_read(&self.entries, "SingletonCache::len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl std::fmt::Debug for SingletonCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.entries.read().map(|e| e.len()).ok();
        f.debug_struct("SingletonCache").field("entries", &len).finish()
    }
}
