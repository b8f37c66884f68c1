//! Resolution engine
//!
//! [`Injector`] owns the rule registry and the singleton cache and turns a
//! requested capability into an instance.
//!
//! ## Resolution
//!
//! ```text
//! inject::<dyn Greeter>(parameter?, destination?)
//!         │
//!         ▼
//! RuleKey (capability, parameter type | ANY, destination type | ANY)
//!         │   fallback: (P,D) → (P,ANY) → (ANY,D) → (ANY,ANY)
//!         ▼
//! RuleRegistry::find ──miss──► ParameterCasting | UndefinedInjection
//!         │
//!         ▼ singleton?
//! SingletonCache::get ──hit──► cached instance
//!         │
//!         ▼
//! Factory::produce ──► SingletonCache::store (exact key) ──► instance
//! ```
//!
//! No lock is held while a factory runs, so factories may resolve their own
//! dependencies from the same injector.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use injector_domain::constants::{LOG_TARGET, NO_PARAMETER};
use injector_domain::error::{Error, Result};
use injector_domain::value_objects::{downcast_instance, is_instance_of};
use injector_domain::{Instance, Parameter, Rule, RuleKey, RulePreset, TypeKey};
use itertools::Itertools;
use tracing::{debug, error, info};

use super::cache::SingletonCache;
use super::registry::RuleRegistry;
use super::report::ConfigurationReport;
use super::request::InjectionRequest;
use crate::config::{InjectorConfig, InjectorSettings};

/// Rule registry plus resolution engine
///
/// Construct one at application start and share it as `Arc<Injector>`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use injector_domain::Rule;
/// use injector_infrastructure::di::Injector;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct Hello;
///
/// impl Greeter for Hello {
///     fn greet(&self) -> String {
///         "hi".into()
///     }
/// }
///
/// let injector = Injector::new();
/// injector
///     .add(Rule::singleton::<dyn Greeter, _>(|| {
///         let greeter: Arc<dyn Greeter> = Arc::new(Hello);
///         Ok(greeter)
///     }))
///     .unwrap();
///
/// let greeter: Arc<dyn Greeter> = injector.inject().unwrap();
/// assert_eq!(greeter.greet(), "hi");
/// ```
#[derive(Debug)]
pub struct Injector {
    registry: RuleRegistry,
    cache: SingletonCache,
    settings: InjectorSettings,
    debug_logging: AtomicBool,
}

impl Default for Injector {
    fn default() -> Self {
        Self::with_settings(InjectorSettings::default())
    }
}

impl Injector {
    /// Empty injector with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty injector with explicit settings
    pub fn with_settings(settings: InjectorSettings) -> Self {
        Self {
            registry: RuleRegistry::new(),
            cache: SingletonCache::new(),
            debug_logging: AtomicBool::new(settings.debug_logging),
            settings,
        }
    }

    /// Empty injector configured from a loaded [`InjectorConfig`]
    pub fn from_config(config: &InjectorConfig) -> Self {
        Self::with_settings(config.settings)
    }

    /// Settings the injector was built with
    ///
    /// `debug_logging` reflects the initial value; see
    /// [`Injector::is_debug_logging_enabled`] for the current one.
    pub fn settings(&self) -> InjectorSettings {
        self.settings
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Register a batch of rules
    ///
    /// With `configure_replaces` (the default) all existing rules and cached
    /// singletons are dropped first; otherwise the batch is merged, replacing
    /// rules with equal keys and dropping the singletons those rules made.
    pub fn configure<I>(&self, rules: I) -> Result<()>
    where
        I: IntoIterator<Item = Rule>,
    {
        let replace = self.settings.configure_replaces;
        self.registry.configure(rules, replace)?;
        if replace {
            self.cache.clear()
        } else {
            self.prune_cache()
        }
    }

    /// Register the rules of a preset, same semantics as [`Injector::configure`]
    pub fn configure_with<P: RulePreset + ?Sized>(&self, preset: &P) -> Result<()> {
        self.configure(preset.rules())
    }

    /// Register a single rule, replacing any rule with the same key
    pub fn add(&self, rule: Rule) -> Result<()> {
        self.registry.add(rule)?;
        self.prune_cache()
    }

    /// Drop singletons whose rule is no longer registered
    ///
    /// Takes the registry snapshot and the cache lock one after the other,
    /// never both at once.
    fn prune_cache(&self) -> Result<()> {
        let live = self.registry.rule_ids()?;
        let removed = self.cache.retain_rules(&live)?;
        if removed > 0 && self.is_debug_logging_enabled() {
            debug!(target: LOG_TARGET, removed, "Dropped singletons of replaced rules");
        }
        Ok(())
    }

    /// Remove all rules
    ///
    /// With `reset_clears_cache` (the default) cached singletons are dropped
    /// as well.
    pub fn reset(&self) -> Result<()> {
        self.registry.reset()?;
        if self.settings.reset_clears_cache {
            self.cache.clear()?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    pub fn set_debug_logging(&self, enabled: bool) {
        self.debug_logging.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug_logging_enabled(&self) -> bool {
        self.debug_logging.load(Ordering::Relaxed)
    }

    /// All registered rules, ordered by capability
    pub fn rules(&self) -> Result<std::vec::IntoIter<Arc<Rule>>> {
        self.registry.enumerate()
    }

    /// Report of the current configuration
    pub fn configuration(&self) -> Result<ConfigurationReport> {
        let (lines, rules): (Vec<String>, Vec<_>) = self
            .rules()?
            .map(|rule| (rule.to_string(), rule.descriptor()))
            .unzip();
        Ok(ConfigurationReport::new(lines, rules))
    }

    /// Log the current configuration at info level
    pub fn print_configuration(&self) -> Result<()> {
        let report = self.configuration()?;
        info!(target: LOG_TARGET, rules = report.len(), "Configured injection rules");
        for line in report.lines() {
            info!(target: LOG_TARGET, "  {}", line);
        }
        Ok(())
    }

    /// Number of populated singleton cache entries
    pub fn cached_instances(&self) -> Result<usize> {
        self.cache.len()
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolve capability `C`, inferred from the expected return type
    pub fn inject<C: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<C>> {
        self.inject_request(&InjectionRequest::new())
    }

    /// Resolve `C` handing `parameter` to the factory
    pub fn inject_with<C, P>(&self, parameter: P) -> Result<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
        P: Any + Send + Sync,
    {
        self.inject_request(&InjectionRequest::new().with_parameter(parameter))
    }

    /// Resolve `C` on behalf of destination type `D`
    pub fn inject_for<C, D>(&self) -> Result<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
        D: ?Sized + 'static,
    {
        self.inject_request(&InjectionRequest::new().for_destination::<D>())
    }

    /// Resolve `C` on behalf of `destination`'s type
    ///
    /// `D` must be sized; pass the concrete value (`&*boxed`, not a
    /// `&dyn Trait`) so the destination key is its own type.
    pub fn inject_for_instance<C, D>(&self, destination: &D) -> Result<Arc<C>>
    where
        C: ?Sized + Send + Sync + 'static,
        D: 'static,
    {
        self.inject_request(&InjectionRequest::new().for_instance(destination))
    }

    /// Resolve `C` with a fully specified request
    pub fn inject_request<C: ?Sized + Send + Sync + 'static>(
        &self,
        request: &InjectionRequest,
    ) -> Result<Arc<C>> {
        let key = RuleKey::new(
            TypeKey::of::<C>(),
            request.parameter_key(),
            request.destination(),
        );
        self.resolve_as(key, request.parameter(), downcast_instance::<C>)
    }

    /// Type-erased resolution
    ///
    /// Same lookup, caching and logging as the typed entry points. The
    /// produced instance must be an erased `Arc<capability>` (as built by
    /// [`RuleBuilder`](injector_domain::RuleBuilder)); anything else fails
    /// with [`Error::UndefinedInjection`].
    pub fn resolve(
        &self,
        capability: TypeKey,
        parameter: Option<&Parameter>,
        destination: TypeKey,
    ) -> Result<Instance> {
        let parameter_key = parameter.map_or(TypeKey::ANY, Parameter::type_key);
        let key = RuleKey::new(capability, parameter_key, destination);
        self.resolve_as(key, parameter, |instance| {
            is_instance_of(instance, capability).then(|| Arc::clone(instance))
        })
    }

    fn resolve_as<T>(
        &self,
        key: RuleKey,
        parameter: Option<&Parameter>,
        view: impl Fn(&Instance) -> Option<T>,
    ) -> Result<T> {
        let result = self.try_resolve(key, parameter, view);
        if let Err(err) = &result {
            self.log_failure(&key, err);
        }
        result
    }

    fn try_resolve<T>(
        &self,
        key: RuleKey,
        parameter: Option<&Parameter>,
        view: impl Fn(&Instance) -> Option<T>,
    ) -> Result<T> {
        let Some(rule) = self.registry.find(&key)? else {
            return Err(self.unmatched(&key)?);
        };

        if rule.is_singleton() {
            if let Some(cached) = self.cache.get(&key, rule.id())? {
                if let Some(value) = view(&cached) {
                    self.log_success("Restored cached", &key, &rule);
                    return Ok(value);
                }
            }
        }

        let instance = rule.produce(parameter)?;
        let Some(value) = view(&instance) else {
            return Err(Error::undefined_injection(
                key.capability,
                key.parameter,
                key.destination,
            ));
        };

        if rule.is_singleton() {
            self.cache.store(key, rule.id(), instance)?;
        }
        self.log_success("Successfully injected", &key, &rule);
        Ok(value)
    }

    /// Error for a request no rule matched
    ///
    /// Rules that need a parameter the request lacks (or has with another
    /// type) turn the miss into a parameter casting error.
    fn unmatched(&self, key: &RuleKey) -> Result<Error> {
        let expected = self
            .registry
            .parameter_types(key.capability, key.destination)?;
        if expected.is_empty() {
            return Ok(Error::undefined_injection(
                key.capability,
                key.parameter,
                key.destination,
            ));
        }

        let actual = key.parameter.specific().map_or(NO_PARAMETER, |k| k.name());
        Ok(Error::parameter_casting(
            key.capability,
            expected.iter().map(TypeKey::name).join(" | "),
            actual,
        ))
    }

    fn log_success(&self, action: &str, key: &RuleKey, rule: &Rule) {
        if !self.is_debug_logging_enabled() {
            return;
        }
        // The concrete type is only known when the rule declares it
        match rule.meta() {
            Some(produced) => debug!(
                target: LOG_TARGET,
                capability = %key.capability,
                parameter = %key.parameter,
                destination = %key.destination,
                produced = %produced,
                singleton = rule.is_singleton(),
                "{} {} with {}",
                action,
                key.capability,
                produced
            ),
            None => debug!(
                target: LOG_TARGET,
                capability = %key.capability,
                parameter = %key.parameter,
                destination = %key.destination,
                singleton = rule.is_singleton(),
                "{} {}",
                action,
                key.capability
            ),
        }
    }

    fn log_failure(&self, key: &RuleKey, err: &Error) {
        if !self.is_debug_logging_enabled() {
            return;
        }
        match err {
            Error::UndefinedInjection { .. } => error!(
                target: LOG_TARGET,
                capability = %key.capability,
                parameter = %key.parameter,
                destination = %key.destination,
                "Didn't find any rule suitable for injection of {} with parameter {} for {}",
                key.capability,
                key.parameter,
                key.destination
            ),
            Error::ParameterCasting {
                expected, actual, ..
            } => error!(
                target: LOG_TARGET,
                capability = %key.capability,
                destination = %key.destination,
                "Failed to cast parameter for injection of {}. Expected '{}', but actual parameter is of type '{}'",
                key.capability,
                expected,
                actual
            ),
            other => error!(
                target: LOG_TARGET,
                capability = %key.capability,
                parameter = %key.parameter,
                destination = %key.destination,
                "{} injection failed: {}",
                key.capability,
                other
            ),
        }
    }
}
