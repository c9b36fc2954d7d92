//! Call-site arguments of an action reference.

use std::fmt;

use log::debug;

use crate::action::error::{BoxError, Error};
use crate::route::RouteValue;

type Thunk = Box<dyn Fn() -> Result<RouteValue, BoxError>>;

/// An argument written at the call site of an action reference.
///
/// Only [`RouteFactory::build_with_defaults`](crate::RouteFactory::build_with_defaults)
/// looks at arguments; plain `build` treats them as placeholders.
pub enum Argument {
    /// A literal value, used as-is.
    Literal(RouteValue),
    /// A value computed once, when the route is built.
    Computed(Thunk),
    /// A reference to a route parameter; produces no default.
    ParameterRef(String),
}

impl Argument {
    /// A literal argument.
    pub fn literal(value: impl Into<RouteValue>) -> Self {
        Argument::Literal(value.into())
    }

    /// An argument evaluated at build time by calling `f`.
    pub fn computed<F, T>(f: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: Into<RouteValue>,
    {
        Argument::Computed(Box::new(move || Ok(f().into())))
    }

    /// An argument evaluated at build time by calling a fallible `f`.
    pub fn try_computed<F, T, E>(f: F) -> Self
    where
        F: Fn() -> Result<T, E> + 'static,
        T: Into<RouteValue>,
        E: Into<BoxError>,
    {
        Argument::Computed(Box::new(move || f().map(Into::into).map_err(Into::into)))
    }

    /// A reference to the named route parameter.
    pub fn parameter(name: impl Into<String>) -> Self {
        Argument::ParameterRef(name.into())
    }

    /// Resolve this argument into a default value for `parameter`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for parameter references, the value otherwise
    pub fn resolve(&self, parameter: &str) -> Result<Option<RouteValue>, Error> {
        match self {
            Argument::Literal(value) => Ok(Some(value.clone())),
            Argument::Computed(thunk) => thunk()
                .map(Some)
                .map_err(|source| Error::ArgumentEvaluation {
                    parameter: parameter.to_string(),
                    source,
                }),
            Argument::ParameterRef(name) => {
                debug!("Argument for {parameter} refers to route parameter {name}, no default set");
                Ok(None)
            }
        }
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Argument::Computed(_) => f.write_str("Computed(..)"),
            Argument::ParameterRef(name) => f.debug_tuple("ParameterRef").field(name).finish(),
        }
    }
}
