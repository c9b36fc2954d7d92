//! Controller action metadata.
//!
//! This module describes the handler side of a route: which controller a route
//! targets, which action method it calls, the action's parameter signature, and
//! the arguments written at the call site.

mod argument;
mod call;
mod controller;
mod error;
mod method;
mod tests;

// Re-export public items
pub use argument::Argument;
pub use call::ActionCall;
pub use controller::{strip_controller_suffix, Controller, CONTROLLER_SUFFIX};
pub use error::{BoxError, Error};
pub use method::{ActionMethod, Parameter};
