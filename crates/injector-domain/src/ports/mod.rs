//! Domain ports
//!
//! Seams where the host application plugs its own code into the engine:
//! factories producing instances and presets bundling rules.

pub mod factory;
pub mod preset;

pub use factory::Factory;
pub use preset::RulePreset;
