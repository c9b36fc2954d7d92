//! Entry points that turn action references into route builders.

use log::debug;

use crate::action::{ActionCall, Controller, Error as ActionError};
use crate::route::builder::RouteBuilder;
use crate::route::error::Error;

/// Creates [`RouteBuilder`]s from typed action references.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteFactory;

impl RouteFactory {
    /// Build a route for the referenced action.
    ///
    /// The call-site arguments are not looked at. A non-blank `url` replaces
    /// the URL template derived from the action's parameters.
    ///
    /// # Errors
    ///
    /// Fails if the action is not declared by `C` or if `C`'s type name lacks
    /// the `Controller` suffix.
    pub fn build<C: Controller>(call: ActionCall<C>, url: &str) -> Result<RouteBuilder, Error> {
        let method = call.resolve()?;
        Ok(RouteBuilder::new(C::type_name(), method)?.set_url(url))
    }

    /// Build a route and seed its defaults from the call-site arguments.
    ///
    /// Arguments are matched to parameters by position. Literal arguments are
    /// used as-is and computed arguments are evaluated now. Parameter
    /// references set no default. A parameter with no argument falls back to
    /// its static default.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`build`](RouteFactory::build), fails if
    /// there are more arguments than parameters, if a required parameter has
    /// no argument, or if a computed argument fails.
    pub fn build_with_defaults<C: Controller>(call: ActionCall<C>, url: &str) -> Result<RouteBuilder, Error> {
        let (method, arguments) = call.into_parts()?;
        let mut builder = RouteBuilder::new(C::type_name(), method)?.set_url(url);
        let parameters = builder.action().parameters.clone();

        if arguments.len() > parameters.len() {
            return Err(ActionError::ArgumentCount {
                action: builder.action().name.clone(),
                expected: parameters.len(),
                found: arguments.len(),
            }
            .into());
        }

        for (index, parameter) in parameters.into_iter().enumerate() {
            let value = match arguments.get(index) {
                Some(argument) => argument.resolve(&parameter.name)?,
                None if parameter.optional => parameter.default,
                None => return Err(ActionError::MissingArgument(parameter.name).into()),
            };
            match value {
                Some(value) => builder = builder.add_default(parameter.name, value),
                None => debug!("No default for parameter {name}", name = parameter.name),
            }
        }
        Ok(builder)
    }
}
