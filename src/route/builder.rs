//! The fluent route builder.

use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

use crate::action::{strip_controller_suffix, ActionMethod};
use crate::route::constraint::{Constraint, RouteConstraint, RouteConstraints};
use crate::route::error::Error;
use crate::route::handler::{ControllerHandler, RouteHandler};
use crate::route::properties::{PropertyBag, PropertyValue};
use crate::route::table::{RouteEntry, RouteRegistry};
use crate::route::value::{RouteDefaults, RouteValue};

/// Default-value key that receives the controller name on materialize.
pub const CONTROLLER_KEY: &str = "Controller";

/// Default-value key that receives the action name on materialize.
pub const ACTION_KEY: &str = "Action";

/// An in-progress route definition for one controller action.
///
/// Every setter consumes and returns the builder, so calls chain. Nothing
/// reaches a router until [`materialize`](RouteBuilder::materialize).
#[derive(Debug, Clone)]
pub struct RouteBuilder {
    controller_type: String,
    controller: String,
    action: ActionMethod,
    name: String,
    url: String,
    defaults: RouteDefaults,
    constraints: RouteConstraints,
    handler: Arc<dyn RouteHandler>,
}

impl RouteBuilder {
    /// Create a builder for `action` on the controller type `controller_type`.
    ///
    /// The route name is derived as `<controller>_<action>` and the URL
    /// template as `{p1}/{p2}/...`, where `<controller>` is the type name with
    /// its `Controller` suffix removed.
    ///
    /// # Errors
    ///
    /// Fails if the type name lacks the `Controller` suffix.
    pub fn new(controller_type: &str, action: ActionMethod) -> Result<Self, Error> {
        let controller = strip_controller_suffix(controller_type)?.to_string();
        let name = format!("{controller}_{action}", action = action.name);
        let url = action.url_template();

        Ok(Self {
            controller_type: controller_type.to_string(),
            controller,
            action,
            name,
            url,
            defaults: RouteDefaults::new(),
            constraints: RouteConstraints::new(),
            handler: Arc::new(ControllerHandler),
        })
    }

    /// Override the URL template. Empty or whitespace-only input is ignored.
    pub fn set_url(mut self, url: &str) -> Self {
        if url.trim().is_empty() {
            debug!("Ignoring blank URL for route {name}", name = self.name);
        } else {
            self.url = url.to_string();
        }
        self
    }

    /// Override the route name.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the default value for a parameter, replacing any earlier one.
    pub fn add_default(mut self, parameter: impl Into<String>, value: impl Into<RouteValue>) -> Self {
        self.defaults.insert(parameter, value.into());
        self
    }

    /// Copy the static defaults of the action's optional parameters.
    ///
    /// Optional parameters without a static default are skipped.
    pub fn add_defaults_from_signature(mut self) -> Self {
        for parameter in self.action.parameters.iter().filter(|p| p.has_default()) {
            if let Some(default) = &parameter.default {
                self.defaults.insert(parameter.name.clone(), default.clone());
            }
        }
        self
    }

    /// Mark a parameter as optional in the matched URL.
    pub fn set_optional_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.defaults.insert(parameter, RouteValue::Optional);
        self
    }

    /// Replace the handler binding. `None` leaves the current binding in place.
    pub fn set_handler_binding(mut self, handler: Option<Arc<dyn RouteHandler>>) -> Self {
        if let Some(handler) = handler {
            self.handler = handler;
        }
        self
    }

    /// Replace the handler binding with a fresh `H`.
    pub fn set_handler_binding_type<H: RouteHandler + Default + 'static>(mut self) -> Self {
        self.handler = Arc::new(H::default());
        self
    }

    /// Constrain a parameter with a pattern string or a constraint object.
    pub fn add_constraint(mut self, parameter: impl Into<String>, constraint: impl Into<Constraint>) -> Self {
        self.constraints.insert(parameter, constraint.into());
        self
    }

    /// Constrain a parameter with a fresh `T`.
    pub fn add_constraint_type<T: RouteConstraint + Default + 'static>(
        self,
        parameter: impl Into<String>,
    ) -> Self {
        self.add_constraint(parameter, Constraint::predicate(T::default()))
    }

    /// Add a constraint that is not tied to a parameter.
    ///
    /// Each call installs the constraint under a freshly generated key.
    pub fn add_global_constraint(self, constraint: impl RouteConstraint + 'static) -> Self {
        let key = Uuid::new_v4().to_string();
        self.add_constraint(key, Constraint::predicate(constraint))
    }

    /// Add a global constraint of type `T`.
    pub fn add_global_constraint_type<T: RouteConstraint + Default + 'static>(self) -> Self {
        self.add_global_constraint(T::default())
    }

    /// Add named constraints from a typed mapping.
    pub fn add_constraints<I, K, C>(self, constraints: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<Constraint>,
    {
        constraints
            .into_iter()
            .fold(self, |builder, (parameter, constraint)| {
                builder.add_constraint(parameter, constraint)
            })
    }

    /// Add a named constraint for every string or constraint-object property
    /// of `bag`. Properties of other kinds are ignored.
    pub fn add_constraints_from_object(self, bag: &impl PropertyBag) -> Self {
        bag.properties()
            .into_iter()
            .fold(self, |builder, (name, value)| match value {
                PropertyValue::Str(pattern) => builder.add_constraint(name, pattern),
                PropertyValue::Constraint(predicate) => builder.add_constraint(name, predicate),
                PropertyValue::Other => {
                    debug!("Skipping property {name}: not a constraint");
                    builder
                }
            })
    }

    /// The controller type name, e.g. `ProductsController`.
    pub fn controller_type(&self) -> &str {
        &self.controller_type
    }

    /// The controller name without its suffix, e.g. `Products`.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The target action's signature.
    pub fn action(&self) -> &ActionMethod {
        &self.action
    }

    /// The route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URL template, relative to the controller segment.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The default values set so far.
    pub fn defaults(&self) -> &RouteDefaults {
        &self.defaults
    }

    /// The constraints set so far.
    pub fn constraints(&self) -> &RouteConstraints {
        &self.constraints
    }

    /// The handler binding.
    pub fn handler(&self) -> &Arc<dyn RouteHandler> {
        &self.handler
    }

    /// The full path the route is registered with: `<controller>/<url>`.
    pub fn path(&self) -> String {
        if self.url.is_empty() {
            self.controller.clone()
        } else {
            format!("{controller}/{url}", controller = self.controller, url = self.url)
        }
    }

    /// Register the route in `registry` and copy this definition onto it.
    ///
    /// The controller and action names are written to the entry's defaults
    /// last, so they replace any caller-supplied values under the same keys.
    /// Calling this twice registers the definition twice.
    pub fn materialize<'r, R: RouteRegistry>(&self, registry: &'r mut R) -> Result<&'r mut R::Entry, Error> {
        let path = self.path();
        let entry = registry.map_route(&self.name, &path)?;

        if !Arc::ptr_eq(entry.handler(), &self.handler) {
            entry.set_handler(Arc::clone(&self.handler));
        }

        let defaults = entry.defaults_mut();
        for (key, value) in self.defaults.iter() {
            defaults.insert(key, value.clone());
        }

        let constraints = entry.constraints_mut();
        for (key, constraint) in self.constraints.iter() {
            constraints.insert(key, constraint.clone());
        }

        let defaults = entry.defaults_mut();
        defaults.insert(CONTROLLER_KEY, RouteValue::from(self.controller.as_str()));
        defaults.insert(ACTION_KEY, RouteValue::from(self.action.name.as_str()));

        info!(
            "Mapped route {name} to {path} ({handler} handler)",
            name = self.name,
            handler = self.handler.name()
        );
        Ok(entry)
    }
}
