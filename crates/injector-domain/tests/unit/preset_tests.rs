//! Rule preset tests

use std::sync::Arc;

use injector_domain::{Rule, RulePreset, TypeKey};

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

struct TestPreset;

impl RulePreset for TestPreset {
    fn rules(&self) -> Vec<Rule> {
        vec![
            Rule::singleton::<dyn Clock, _>(|| {
                let clock: Arc<dyn Clock> = Arc::new(FixedClock(7));
                Ok(clock)
            }),
            Rule::builder::<String>().instance(Arc::new(String::from("name"))),
        ]
    }
}

#[test]
fn test_preset_provides_rules() {
    let rules = TestPreset.rules();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].capability(), TypeKey::of::<dyn Clock>());
    assert!(rules[0].is_singleton());
    assert_eq!(rules[1].capability(), TypeKey::of::<String>());
}

#[test]
fn test_vec_is_a_preset() {
    let rules = vec![Rule::new::<u8, _>(|| Ok(Arc::new(3)))];
    let from_preset = rules.rules();
    assert_eq!(from_preset.len(), 1);
    assert_eq!(from_preset[0].id(), rules[0].id());
}
