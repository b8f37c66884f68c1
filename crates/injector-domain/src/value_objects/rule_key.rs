//! Composite lookup key for rules and cached singletons

use std::fmt;

use serde::Serialize;

use super::type_key::TypeKey;

/// `(capability, parameter, destination)` triple
///
/// Rules are stored under the key derived from their own fields. Lookups
/// build a key from the request and walk [`RuleKey::fallback_chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RuleKey {
    /// Capability being satisfied
    pub capability: TypeKey,
    /// Parameter type, `ANY` when unrestricted
    pub parameter: TypeKey,
    /// Destination type, `ANY` when unrestricted
    pub destination: TypeKey,
}

impl RuleKey {
    /// Create a key from its three components
    pub fn new(capability: TypeKey, parameter: TypeKey, destination: TypeKey) -> Self {
        Self {
            capability,
            parameter,
            destination,
        }
    }

    /// Key for a capability with no parameter or destination restriction
    pub fn capability(capability: TypeKey) -> Self {
        Self::new(capability, TypeKey::ANY, TypeKey::ANY)
    }

    /// Keys to probe for this request, most specific first
    ///
    /// Order is `(P, D)`, `(P, ANY)`, `(ANY, D)`, `(ANY, ANY)`. A concrete
    /// parameter match beats a concrete destination match. Duplicates that
    /// arise when `P` or `D` already is `ANY` are skipped.
    ///
    /// ```
    /// use injector_domain::{RuleKey, TypeKey};
    ///
    /// let key = RuleKey::new(TypeKey::of::<u8>(), TypeKey::ANY, TypeKey::of::<u16>());
    /// let chain = key.fallback_chain();
    /// assert_eq!(chain.len(), 2);
    /// assert_eq!(chain[0], key);
    /// assert_eq!(chain[1], RuleKey::capability(TypeKey::of::<u8>()));
    /// ```
    pub fn fallback_chain(&self) -> Vec<RuleKey> {
        let candidates = [
            (self.parameter, self.destination),
            (self.parameter, TypeKey::ANY),
            (TypeKey::ANY, self.destination),
            (TypeKey::ANY, TypeKey::ANY),
        ];

        let mut chain: Vec<RuleKey> = Vec::with_capacity(candidates.len());
        for (parameter, destination) in candidates {
            let key = RuleKey::new(self.capability, parameter, destination);
            if !chain.contains(&key) {
                chain.push(key);
            }
        }
        chain
    }

    /// Whether a rule stored under `self` can serve a request for `destination`
    pub fn accepts_destination(&self, destination: TypeKey) -> bool {
        self.destination.is_any() || self.destination == destination
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] -> {}",
            self.capability, self.parameter, self.destination
        )
    }
}
