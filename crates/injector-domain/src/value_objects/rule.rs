//! Injection rules
//!
//! A [`Rule`] tells the injector how to produce an instance of a capability,
//! optionally only for a given parameter type and/or destination type, and
//! whether the produced instance is reused.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::instance::{Instance, Parameter, into_instance};
use super::rule_key::RuleKey;
use super::type_key::TypeKey;
use crate::constants::NO_PARAMETER;
use crate::error::{Error, Result};
use crate::ports::Factory;

static NEXT_RULE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a rule
///
/// Assigned at construction. Cached singletons remember the id of the rule
/// that produced them, so a replaced rule never serves its predecessor's
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RuleId(u64);

impl RuleId {
    fn next() -> Self {
        RuleId(NEXT_RULE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Immutable binding from a capability to its construction logic
#[derive(Clone)]
pub struct Rule {
    id: RuleId,
    key: RuleKey,
    singleton: bool,
    meta: Option<TypeKey>,
    factory: Arc<dyn Factory>,
}

impl Rule {
    /// Start building a rule for capability `C`
    ///
    /// `C` is usually a trait object such as `dyn Greeter`, but any
    /// `'static + Send + Sync` type works.
    pub fn builder<C: ?Sized + Send + Sync + 'static>() -> RuleBuilder<C> {
        RuleBuilder::new()
    }

    /// Transient rule for `C` without parameter or destination restriction
    pub fn new<C, F>(factory: F) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn() -> Result<Arc<C>> + Send + Sync + 'static,
    {
        Self::builder::<C>().factory(factory)
    }

    /// Singleton rule for `C` without parameter or destination restriction
    pub fn singleton<C, F>(factory: F) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
        F: Fn() -> Result<Arc<C>> + Send + Sync + 'static,
    {
        Self::builder::<C>().once().factory(factory)
    }

    /// Build a rule from already-erased parts
    ///
    /// Fails with [`Error::InvalidRule`] when the capability is the wildcard.
    pub fn from_parts(
        key: RuleKey,
        singleton: bool,
        meta: Option<TypeKey>,
        factory: Arc<dyn Factory>,
    ) -> Result<Self> {
        if key.capability.is_any() {
            return Err(Error::invalid_rule(format!(
                "capability must be a concrete type, got {}",
                key.capability
            )));
        }
        Ok(Self::assemble(key, singleton, meta, factory))
    }

    fn assemble(
        key: RuleKey,
        singleton: bool,
        meta: Option<TypeKey>,
        factory: Arc<dyn Factory>,
    ) -> Self {
        Self {
            id: RuleId::next(),
            key,
            singleton,
            meta,
            factory,
        }
    }

    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn key(&self) -> RuleKey {
        self.key
    }

    pub fn capability(&self) -> TypeKey {
        self.key.capability
    }

    pub fn parameter(&self) -> TypeKey {
        self.key.parameter
    }

    pub fn destination(&self) -> TypeKey {
        self.key.destination
    }

    pub fn is_singleton(&self) -> bool {
        self.singleton
    }

    pub fn meta(&self) -> Option<TypeKey> {
        self.meta
    }

    /// Whether the rule only applies to requests carrying a parameter
    pub fn requires_parameter(&self) -> bool {
        !self.key.parameter.is_any()
    }

    /// Run the factory
    pub fn produce(&self, parameter: Option<&Parameter>) -> Result<Instance> {
        self.factory.produce(parameter)
    }

    /// Serializable snapshot for diagnostics
    pub fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor {
            capability: self.key.capability.name().to_string(),
            parameter: self.key.parameter.specific().map(|k| k.name().to_string()),
            destination: self.key.destination.specific().map(|k| k.name().to_string()),
            meta: self.meta.map(|k| k.name().to_string()),
            singleton: self.singleton,
        }
    }
}

/// Renders `Capability [Parameter] -> Destination : Meta`, omitting the
/// parts that are unrestricted.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key.capability)?;
        if let Some(parameter) = self.key.parameter.specific() {
            write!(f, " [{parameter}]")?;
        }
        if let Some(destination) = self.key.destination.specific() {
            write!(f, " -> {destination}")?;
        }
        if let Some(meta) = self.meta {
            write!(f, " : {meta}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("singleton", &self.singleton)
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

/// Serializable description of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    pub capability: String,
    pub parameter: Option<String>,
    pub destination: Option<String>,
    pub meta: Option<String>,
    pub singleton: bool,
}

/// Typed builder for [`Rule`]
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use injector_domain::Rule;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct Hello;
///
/// impl Greeter for Hello {
///     fn greet(&self) -> String {
///         "hello".into()
///     }
/// }
///
/// struct Screen;
///
/// let rule = Rule::builder::<dyn Greeter>()
///     .for_destination::<Screen>()
///     .meta::<Hello>()
///     .once()
///     .factory(|| {
///         let greeter: Arc<dyn Greeter> = Arc::new(Hello);
///         Ok(greeter)
///     });
///
/// assert!(rule.is_singleton());
/// assert!(!rule.requires_parameter());
/// ```
pub struct RuleBuilder<C: ?Sized> {
    destination: TypeKey,
    singleton: bool,
    meta: Option<TypeKey>,
    capability: PhantomData<fn() -> Arc<C>>,
}

impl<C: ?Sized + Send + Sync + 'static> RuleBuilder<C> {
    fn new() -> Self {
        Self {
            destination: TypeKey::ANY,
            singleton: false,
            meta: None,
            capability: PhantomData,
        }
    }

    /// Only apply the rule when resolving for destination `D`
    #[must_use]
    pub fn for_destination<D: ?Sized + 'static>(mut self) -> Self {
        self.destination = TypeKey::of::<D>();
        self
    }

    /// Reuse the first produced instance
    #[must_use]
    pub fn once(self) -> Self {
        self.singleton(true)
    }

    #[must_use]
    pub fn singleton(mut self, singleton: bool) -> Self {
        self.singleton = singleton;
        self
    }

    /// Label the rule with the concrete type it produces
    #[must_use]
    pub fn meta<M: ?Sized + 'static>(mut self) -> Self {
        self.meta = Some(TypeKey::of::<M>());
        self
    }

    /// Finish with a factory that ignores any parameter
    pub fn factory<F>(self, factory: F) -> Rule
    where
        F: Fn() -> Result<Arc<C>> + Send + Sync + 'static,
    {
        let key = self.key(TypeKey::ANY);
        self.finish(key, move |_: Option<&Parameter>| factory().map(into_instance))
    }

    /// Finish with a factory that requires a parameter of type `P`
    ///
    /// The rule only matches requests whose parameter is a `P`. A missing or
    /// differently typed parameter fails with [`Error::ParameterCasting`].
    pub fn factory_with<P, F>(self, factory: F) -> Rule
    where
        P: Any + Send + Sync,
        F: Fn(&P) -> Result<Arc<C>> + Send + Sync + 'static,
    {
        let expected = TypeKey::of::<P>();
        let key = self.key(expected);
        let capability = key.capability;
        self.finish(key, move |parameter: Option<&Parameter>| {
            let Some(parameter) = parameter else {
                return Err(Error::parameter_casting(
                    capability,
                    expected.name(),
                    NO_PARAMETER,
                ));
            };
            let Some(value) = parameter.downcast_ref::<P>() else {
                return Err(Error::parameter_casting(
                    capability,
                    expected.name(),
                    parameter.type_key().name(),
                ));
            };
            factory(value).map(into_instance)
        })
    }

    /// Finish with an already built value, always marked singleton
    pub fn instance(mut self, value: Arc<C>) -> Rule {
        self.singleton = true;
        let key = self.key(TypeKey::ANY);
        self.finish(key, move |_: Option<&Parameter>| Ok(into_instance(value.clone())))
    }

    fn key(&self, parameter: TypeKey) -> RuleKey {
        RuleKey::new(TypeKey::of::<C>(), parameter, self.destination)
    }

    fn finish<F>(self, key: RuleKey, factory: F) -> Rule
    where
        F: Fn(Option<&Parameter>) -> Result<Instance> + Send + Sync + 'static,
    {
        Rule::assemble(key, self.singleton, self.meta, Arc::new(factory))
    }
}
