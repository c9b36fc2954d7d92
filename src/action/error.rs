//! Error types for action metadata.

use thiserror::Error;

/// Boxed error returned by fallible computed arguments.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while resolving a controller action reference.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced action is not declared by the controller.
    #[error("Controller {controller} has no action named {action}")]
    UnknownAction { controller: String, action: String },

    /// Overloads share the action name and the arguments do not pick exactly one.
    #[error("Action {controller}::{action} with {arguments} arguments matches {matches} overloads")]
    AmbiguousAction {
        controller: String,
        action: String,
        arguments: usize,
        matches: usize,
    },

    /// The controller type name does not contain the `Controller` suffix.
    #[error("Controller type {0} does not follow the `...Controller` naming convention")]
    NamingConvention(String),

    /// The call site supplies more arguments than the action declares.
    #[error("Action {action} takes {expected} parameters but {found} arguments were supplied")]
    ArgumentCount {
        action: String,
        expected: usize,
        found: usize,
    },

    /// A required parameter has no argument at the call site.
    #[error("Missing argument for required parameter: {0}")]
    MissingArgument(String),

    /// A computed argument failed while being evaluated.
    #[error("Failed to evaluate argument for parameter {parameter}: {source}")]
    ArgumentEvaluation {
        parameter: String,
        #[source]
        source: BoxError,
    },
}
