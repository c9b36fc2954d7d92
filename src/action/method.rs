//! Action method signatures.

use crate::route::RouteValue;

/// One declared parameter of an action method.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The parameter name as it appears in the URL template.
    pub name: String,
    /// The Rust type the action expects for this parameter.
    pub type_name: &'static str,
    /// Whether the parameter may be omitted.
    pub optional: bool,
    /// The statically declared default value, if any.
    pub default: Option<RouteValue>,
}

impl Parameter {
    /// Whether this parameter is optional and carries a static default.
    pub fn has_default(&self) -> bool {
        self.optional && self.default.is_some()
    }
}

/// The signature of a controller action: its name and ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionMethod {
    /// The action name.
    pub name: String,
    /// The parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl ActionMethod {
    /// Create an action signature with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a required parameter of type `T`.
    pub fn param<T>(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            type_name: std::any::type_name::<T>(),
            optional: false,
            default: None,
        });
        self
    }

    /// Append an optional parameter with a static default value.
    pub fn optional_param<T: Into<RouteValue>>(mut self, name: impl Into<String>, default: T) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            type_name: std::any::type_name::<T>(),
            optional: true,
            default: Some(default.into()),
        });
        self
    }

    /// Append an optional parameter of type `T` that has no static default.
    pub fn nullable_param<T>(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            type_name: std::any::type_name::<Option<T>>(),
            optional: true,
            default: None,
        });
        self
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Whether a call with `count` arguments fits this signature.
    pub fn accepts_arguments(&self, count: usize) -> bool {
        let required = self.parameters.iter().filter(|p| !p.optional).count();
        count >= required && count <= self.parameters.len()
    }

    /// The URL template derived from the signature: `{p1}/{p2}/...`.
    pub fn url_template(&self) -> String {
        self.parameters
            .iter()
            .map(|p| format!("{{{name}}}", name = p.name))
            .collect::<Vec<String>>()
            .join("/")
    }
}
