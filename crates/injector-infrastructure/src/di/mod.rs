//! Dependency Injection Engine
//!
//! ## Architecture Overview
//!
//! ```text
//! Injector
//! ├── RuleRegistry     RwLock<HashMap<RuleKey, Arc<Rule>>>
//! └── SingletonCache   RwLock<HashMap<RuleKey, CachedInstance>>
//! ```
//!
//! The two maps are guarded independently and no operation holds both
//! locks at once. Cache population is read-then-write: two threads racing
//! on the same key may both run the factory, and the last store wins.

pub mod cache;
pub mod injector;
pub mod registry;
pub mod report;
pub mod request;

pub use cache::{CachedInstance, SingletonCache};
pub use injector::Injector;
pub use registry::RuleRegistry;
pub use report::ConfigurationReport;
pub use request::InjectionRequest;
