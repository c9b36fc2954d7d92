//! Handler bindings: the object that dispatches a matched request.

use std::fmt;

/// Dispatches requests matched by a route to the target action.
///
/// Dispatch itself is the router's business; a route only records which
/// binding it uses.
pub trait RouteHandler: fmt::Debug + Send + Sync {
    /// A short name identifying the binding kind.
    fn name(&self) -> &str;
}

/// The standard binding: dispatch to the route's controller action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerHandler;

impl RouteHandler for ControllerHandler {
    fn name(&self) -> &str {
        "controller"
    }
}
