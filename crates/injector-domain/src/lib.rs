//! # Injector Domain
//!
//! Core types of the injection engine. Nothing in this crate touches locks,
//! logging subscribers or configuration files; those concerns live in
//! `injector-infrastructure`.
//!
//! ## Contents
//!
//! - [`TypeKey`] - opaque, comparable identity of a type with a reserved
//!   wildcard [`TypeKey::ANY`]
//! - [`RuleKey`] - composite `(capability, parameter, destination)` key and
//!   its lookup fallback chain
//! - [`Rule`] / [`RuleBuilder`] - immutable binding from a capability to a
//!   [`Factory`]
//! - [`Parameter`] - runtime value handed to factories
//! - [`RulePreset`] - a bundle of rules passed to the injector in one call
//! - [`Error`] - the failure taxonomy

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{Factory, RulePreset};
pub use value_objects::{
    Instance, Parameter, Rule, RuleBuilder, RuleDescriptor, RuleId, RuleKey, TypeKey,
    downcast_instance, into_instance, is_instance_of,
};
