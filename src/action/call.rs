//! Typed references to controller actions.

use std::fmt;
use std::marker::PhantomData;

use crate::action::argument::Argument;
use crate::action::controller::Controller;
use crate::action::error::Error;
use crate::action::method::ActionMethod;
use crate::route::RouteValue;

/// A call to an action on controller `C`, with its call-site arguments.
///
/// # Examples
///
/// ```
/// use fluentroute_rs::{ActionCall, ActionMethod, Controller};
///
/// struct ProductsController;
///
/// impl Controller for ProductsController {
///     fn actions() -> Vec<ActionMethod> {
///         vec![ActionMethod::new("Details").param::<i32>("id")]
///     }
/// }
///
/// let call = ActionCall::<ProductsController>::new("Details").arg(5);
/// assert_eq!(call.action(), "Details");
/// assert_eq!(call.arguments().len(), 1);
/// ```
pub struct ActionCall<C: Controller> {
    action: String,
    arguments: Vec<Argument>,
    controller: PhantomData<fn() -> C>,
}

impl<C: Controller> ActionCall<C> {
    /// Reference the action named `action` on `C`.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            arguments: Vec::new(),
            controller: PhantomData,
        }
    }

    /// Append a literal argument.
    pub fn arg(self, value: impl Into<RouteValue>) -> Self {
        self.argument(Argument::literal(value))
    }

    /// Append an argument computed at build time.
    pub fn computed<F, T>(self, f: F) -> Self
    where
        F: Fn() -> T + 'static,
        T: Into<RouteValue>,
    {
        self.argument(Argument::computed(f))
    }

    /// Append a reference to a route parameter.
    pub fn parameter(self, name: impl Into<String>) -> Self {
        self.argument(Argument::parameter(name))
    }

    /// Append an argument descriptor.
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// The referenced action name.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The call-site arguments in order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Look up the referenced action among the controller's declared actions.
    ///
    /// When several actions share the name, the one whose parameter list
    /// accepts the number of call-site arguments is chosen.
    pub fn resolve(&self) -> Result<ActionMethod, Error> {
        let mut candidates: Vec<ActionMethod> = C::actions()
            .into_iter()
            .filter(|method| method.name == self.action)
            .collect();

        if candidates.len() > 1 {
            let count = self.arguments.len();
            candidates.retain(|method| method.accepts_arguments(count));
            if candidates.len() != 1 {
                return Err(Error::AmbiguousAction {
                    controller: C::type_name().to_string(),
                    action: self.action.clone(),
                    arguments: count,
                    matches: candidates.len(),
                });
            }
        }

        candidates.pop().ok_or_else(|| Error::UnknownAction {
            controller: C::type_name().to_string(),
            action: self.action.clone(),
        })
    }

    /// Split the call into its resolved signature and its arguments.
    pub fn into_parts(self) -> Result<(ActionMethod, Vec<Argument>), Error> {
        let method = self.resolve()?;
        Ok((method, self.arguments))
    }
}

impl<C: Controller> fmt::Debug for ActionCall<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCall")
            .field("controller", &C::type_name())
            .field("action", &self.action)
            .field("arguments", &self.arguments)
            .finish()
    }
}
