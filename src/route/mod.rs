//! Route definitions.
//!
//! This module provides the fluent [`RouteBuilder`], the [`RouteFactory`] entry
//! points, the value and constraint types a route carries, and the
//! [`RouteRegistry`] abstraction a builder registers into.

mod builder;
mod config;
mod constraint;
mod error;
mod factory;
mod handler;
mod http_method;
mod properties;
mod table;
mod value;

// Re-export public items
pub use builder::{RouteBuilder, ACTION_KEY, CONTROLLER_KEY};
pub use config::{DuplicateRoutePolicy, RouteTableConfig};
pub use constraint::{
    Constraint, ConstraintContext, MethodConstraint, RegexConstraint, RouteConstraint, RouteConstraints,
};
pub use error::Error;
pub use factory::RouteFactory;
pub use handler::{ControllerHandler, RouteHandler};
pub use http_method::Method;
pub use properties::{PropertyBag, PropertyValue, SerializedProperties};
pub use table::{Route, RouteEntry, RouteRegistry, RouteTable};
pub use value::{RouteDefaults, RouteValue, RouteValueMap};
