//! Value objects of the injection domain
//!
//! Everything here is immutable once constructed and cheap to clone.

pub mod instance;
pub mod rule;
pub mod rule_key;
pub mod type_key;

pub use instance::{Instance, Parameter, downcast_instance, into_instance, is_instance_of};
pub use rule::{Rule, RuleBuilder, RuleDescriptor, RuleId};
pub use rule_key::RuleKey;
pub use type_key::TypeKey;
