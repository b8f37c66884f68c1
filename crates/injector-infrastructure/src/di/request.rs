//! Resolution request context

use std::any::Any;

use injector_domain::{Parameter, TypeKey};

/// Parameter and destination accompanying a resolution call
///
/// # Example
///
/// ```
/// use injector_infrastructure::di::InjectionRequest;
/// use injector_domain::TypeKey;
///
/// struct ReportModule;
///
/// let request = InjectionRequest::new()
///     .with_parameter(42u32)
///     .for_destination::<ReportModule>();
///
/// assert_eq!(request.destination(), TypeKey::of::<ReportModule>());
/// assert_eq!(request.parameter_key(), TypeKey::of::<u32>());
/// ```
#[derive(Debug, Default)]
pub struct InjectionRequest {
    parameter: Option<Parameter>,
    destination: TypeKey,
}

impl InjectionRequest {
    /// Request without parameter or destination
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a runtime parameter
    #[must_use]
    pub fn with_parameter<P: Any + Send + Sync>(mut self, parameter: P) -> Self {
        self.parameter = Some(Parameter::new(parameter));
        self
    }

    /// Resolve on behalf of destination type `D`
    #[must_use]
    pub fn for_destination<D: ?Sized + 'static>(mut self) -> Self {
        self.destination = TypeKey::of::<D>();
        self
    }

    /// Resolve on behalf of `destination`'s type
    ///
    /// `D` must be sized so that the key is the value's own type rather than
    /// a trait it is viewed through.
    #[must_use]
    pub fn for_instance<D: 'static>(mut self, destination: &D) -> Self {
        self.destination = TypeKey::of_val(destination);
        self
    }

    pub fn parameter(&self) -> Option<&Parameter> {
        self.parameter.as_ref()
    }

    /// Runtime type of the parameter, `ANY` when there is none
    pub fn parameter_key(&self) -> TypeKey {
        self.parameter
            .as_ref()
            .map_or(TypeKey::ANY, Parameter::type_key)
    }

    pub fn destination(&self) -> TypeKey {
        self.destination
    }
}
