//! A fluent route builder for controller-based routers.
//!
//! This library turns a typed reference to a controller action into a fully
//! specified route table entry: a name, a URL template, default parameter
//! values, constraints, and a handler binding.
//!
//! # Features
//!
//! - Route names derived as `<Controller>_<Action>` from the controller type
//! - URL templates derived from the action's parameter list (`{id}/{category}`)
//! - Defaults seeded from call-site arguments or from the action signature
//! - Named constraints (regex patterns or constraint objects) and global constraints
//! - Pluggable handler bindings and route registries
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use fluentroute_rs::{ActionCall, ActionMethod, Controller, RouteFactory, RouteTable};
//!
//! struct ProductsController;
//!
//! impl Controller for ProductsController {
//!     fn actions() -> Vec<ActionMethod> {
//!         vec![ActionMethod::new("Details")
//!             .param::<i32>("id")
//!             .optional_param("category", "all")]
//!     }
//! }
//!
//! let mut routes = RouteTable::new();
//! let builder = RouteFactory::build(ActionCall::<ProductsController>::new("Details"), "").unwrap();
//! assert_eq!(builder.name(), "Products_Details");
//! assert_eq!(builder.url(), "{id}/{category}");
//!
//! let route = builder.materialize(&mut routes).unwrap();
//! assert_eq!(route.path, "Products/{id}/{category}");
//! assert_eq!(route.defaults.get("Action").and_then(|v| v.as_str()), Some("Details"));
//! ```
//!
//! ## Defaults and constraints
//!
//! ```
//! use fluentroute_rs::{ActionCall, ActionMethod, Controller, RouteFactory, RouteTable};
//!
//! struct ProductsController;
//!
//! impl Controller for ProductsController {
//!     fn actions() -> Vec<ActionMethod> {
//!         vec![ActionMethod::new("Details")
//!             .param::<i32>("id")
//!             .optional_param("category", "all")]
//!     }
//! }
//!
//! let mut routes = RouteTable::new();
//! let call = ActionCall::<ProductsController>::new("Details").arg(5).arg("shoes");
//! RouteFactory::build_with_defaults(call, "")
//!     .unwrap()
//!     .add_constraint("id", r"\d+")
//!     .materialize(&mut routes)
//!     .unwrap();
//!
//! let route = routes.get("Products_Details").unwrap();
//! assert_eq!(route.defaults.get("category").and_then(|v| v.as_str()), Some("shoes"));
//! assert_eq!(route.constraints.get("id").and_then(|c| c.as_pattern()), Some(r"\d+"));
//! ```
//!
//! ## Error handling
//!
//! ```
//! use fluentroute_rs::{ActionCall, ActionError, ActionMethod, Controller, RouteError, RouteFactory};
//!
//! struct ProductsController;
//!
//! impl Controller for ProductsController {
//!     fn actions() -> Vec<ActionMethod> {
//!         vec![ActionMethod::new("Index")]
//!     }
//! }
//!
//! match RouteFactory::build(ActionCall::<ProductsController>::new("Missing"), "") {
//!     Ok(_) => println!("Route built"),
//!     Err(RouteError::ActionError(ActionError::UnknownAction { action, .. })) => {
//!         println!("Unknown action: {}", action)
//!     }
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```
//!
//! See the `demos` directory for a complete program.

// Export the action module
pub mod action;

// Export the route module
pub mod route;

// Re-export commonly used items for convenience
pub use action::{ActionCall, ActionMethod, Argument, Controller, Error as ActionError, Parameter};
pub use route::{
    Constraint, ConstraintContext, ControllerHandler, DuplicateRoutePolicy, Method, MethodConstraint,
    PropertyBag, PropertyValue, RegexConstraint, Route, RouteBuilder, RouteConstraint, RouteEntry,
    Error as RouteError, RouteFactory, RouteHandler, RouteRegistry, RouteTable, RouteTableConfig, RouteValue,
    SerializedProperties,
};
