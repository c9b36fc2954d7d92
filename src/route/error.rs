//! Error types for route building and registration.

use thiserror::Error;

use crate::action::Error as ActionError;

/// Errors that can occur while building or registering a route.
#[derive(Debug, Error)]
pub enum Error {
    /// The action reference could not be resolved.
    #[error("Action error: {0}")]
    ActionError(#[from] ActionError),

    /// A route with the same name is already registered.
    #[error("A route named {0} is already registered")]
    DuplicateRouteName(String),

    /// A constraint pattern is not a valid regular expression.
    #[error("Invalid constraint pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The HTTP method is not supported.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// A property bag could not be serialized.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
