//! Controllers and their naming convention.

use crate::action::error::Error;
use crate::action::method::ActionMethod;

/// Suffix every controller type name is expected to carry.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// A group of related actions that routes can target.
///
/// Implementors list their action signatures in declaration order. The type
/// name is used to derive route names and paths, so it must contain the
/// `Controller` suffix (for example `ProductsController`).
///
/// # Examples
///
/// ```
/// use fluentroute_rs::{ActionMethod, Controller};
///
/// struct ProductsController;
///
/// impl Controller for ProductsController {
///     fn actions() -> Vec<ActionMethod> {
///         vec![ActionMethod::new("Details").param::<i32>("id")]
///     }
/// }
///
/// assert_eq!(ProductsController::type_name(), "ProductsController");
/// ```
pub trait Controller: 'static {
    /// The controller's type name, without module path or generic arguments.
    fn type_name() -> &'static str
    where
        Self: Sized,
    {
        short_type_name(std::any::type_name::<Self>())
    }

    /// The action methods this controller exposes.
    fn actions() -> Vec<ActionMethod>
    where
        Self: Sized;
}

/// Strip the module path and any generic arguments from a type name.
fn short_type_name(full: &'static str) -> &'static str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Remove the last `Controller` occurrence and everything after it.
///
/// # Arguments
///
/// * `type_name` - The controller type name, e.g. `ProductsController`
///
/// # Returns
///
/// The route-facing controller name (`Products`), or
/// [`Error::NamingConvention`] if the suffix is absent.
pub fn strip_controller_suffix(type_name: &str) -> Result<&str, Error> {
    type_name
        .rfind(CONTROLLER_SUFFIX)
        .map(|index| &type_name[..index])
        .ok_or_else(|| Error::NamingConvention(type_name.to_string()))
}
