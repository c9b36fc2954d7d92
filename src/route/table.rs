//! The router side: registries that own route entries.

use std::sync::Arc;

use log::{info, warn};

use crate::route::config::{DuplicateRoutePolicy, RouteTableConfig};
use crate::route::constraint::RouteConstraints;
use crate::route::error::Error;
use crate::route::handler::{ControllerHandler, RouteHandler};
use crate::route::value::RouteDefaults;

/// A router-owned route entry that a builder writes into.
pub trait RouteEntry {
    /// The current handler binding.
    fn handler(&self) -> &Arc<dyn RouteHandler>;
    /// Replace the handler binding.
    fn set_handler(&mut self, handler: Arc<dyn RouteHandler>);
    /// The entry's default values.
    fn defaults_mut(&mut self) -> &mut RouteDefaults;
    /// The entry's constraints.
    fn constraints_mut(&mut self) -> &mut RouteConstraints;
}

/// A named collection of route entries.
pub trait RouteRegistry {
    /// The entry type handed back to builders.
    type Entry: RouteEntry;

    /// Register an entry under `name` with URL template `path`, or fetch it.
    fn map_route(&mut self, name: &str, path: &str) -> Result<&mut Self::Entry, Error>;
}

/// A route registered in a [`RouteTable`].
#[derive(Debug, Clone)]
pub struct Route {
    /// The unique route name.
    pub name: String,
    /// The URL template, e.g. `Products/{id}/{category}`.
    pub path: String,
    /// Default values keyed by parameter name.
    pub defaults: RouteDefaults,
    /// Constraints keyed by parameter name.
    pub constraints: RouteConstraints,
    /// The handler binding.
    pub handler: Arc<dyn RouteHandler>,
}

impl Route {
    /// Create a route with empty defaults and constraints and a fresh
    /// [`ControllerHandler`] binding.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            defaults: RouteDefaults::new(),
            constraints: RouteConstraints::new(),
            handler: Arc::new(ControllerHandler),
        }
    }
}

impl RouteEntry for Route {
    fn handler(&self) -> &Arc<dyn RouteHandler> {
        &self.handler
    }

    fn set_handler(&mut self, handler: Arc<dyn RouteHandler>) {
        self.handler = handler;
    }

    fn defaults_mut(&mut self) -> &mut RouteDefaults {
        &mut self.defaults
    }

    fn constraints_mut(&mut self) -> &mut RouteConstraints {
        &mut self.constraints
    }
}

/// An in-memory route table, ordered by registration.
#[derive(Debug, Default)]
pub struct RouteTable {
    /// The table configuration.
    pub config: RouteTableConfig,
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty table with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given configuration.
    pub fn with_config(config: RouteTableConfig) -> Self {
        Self {
            config,
            routes: Vec::new(),
        }
    }

    /// Get a route by name.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Iterate over the routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// The number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Log every registered route at info level.
    pub fn log_routes(&self) {
        info!("Registered routes:");
        for route in &self.routes {
            let defaults = route
                .defaults
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<String>>()
                .join(", ");
            info!("  {name} {path} [{defaults}]", name = route.name, path = route.path);
        }
    }
}

impl RouteRegistry for RouteTable {
    type Entry = Route;

    fn map_route(&mut self, name: &str, path: &str) -> Result<&mut Route, Error> {
        let Some(index) = self.routes.iter().position(|route| route.name == name) else {
            self.routes.push(Route::new(name, path));
            let last = self.routes.len() - 1;
            return Ok(&mut self.routes[last]);
        };

        match self.config.duplicate_policy {
            DuplicateRoutePolicy::Reject => Err(Error::DuplicateRouteName(name.to_string())),
            DuplicateRoutePolicy::Replace => {
                warn!("Replacing route {name} ({old} -> {path})", old = self.routes[index].path);
                self.routes[index] = Route::new(name, path);
                Ok(&mut self.routes[index])
            }
            DuplicateRoutePolicy::Reuse => {
                let route = &mut self.routes[index];
                route.path = path.to_string();
                Ok(route)
            }
        }
    }
}
