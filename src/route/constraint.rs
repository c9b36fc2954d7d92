//! Route constraints.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::route::error::Error;
use crate::route::http_method::Method;
use crate::route::value::{RouteDefaults, RouteValue, RouteValueMap};

/// What a constraint predicate gets to look at when the router evaluates it.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintContext<'a> {
    /// The method of the request being matched.
    pub method: Method,
    /// The parameter the constraint is registered under.
    pub parameter: &'a str,
    /// The route values extracted from the URL, merged with defaults.
    pub values: &'a RouteDefaults,
}

/// A predicate that restricts which requests a route matches.
pub trait RouteConstraint: fmt::Debug + Send + Sync {
    /// Whether the request described by `ctx` satisfies this constraint.
    fn matches(&self, ctx: &ConstraintContext<'_>) -> bool;
}

/// A constraint registered on a route: a pattern string or a predicate.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// A regular expression the parameter value must match.
    Pattern(String),
    /// A constraint object evaluated by the router.
    Predicate(Arc<dyn RouteConstraint>),
}

impl Constraint {
    /// Wrap a constraint object.
    pub fn predicate(constraint: impl RouteConstraint + 'static) -> Self {
        Constraint::Predicate(Arc::new(constraint))
    }

    /// The pattern string, if this is a pattern constraint.
    pub fn as_pattern(&self) -> Option<&str> {
        match self {
            Constraint::Pattern(pattern) => Some(pattern),
            Constraint::Predicate(_) => None,
        }
    }

    /// The constraint object, if this is a predicate constraint.
    pub fn as_predicate(&self) -> Option<&Arc<dyn RouteConstraint>> {
        match self {
            Constraint::Pattern(_) => None,
            Constraint::Predicate(predicate) => Some(predicate),
        }
    }
}

impl From<&str> for Constraint {
    fn from(pattern: &str) -> Self {
        Constraint::Pattern(pattern.to_string())
    }
}

impl From<String> for Constraint {
    fn from(pattern: String) -> Self {
        Constraint::Pattern(pattern)
    }
}

impl From<Arc<dyn RouteConstraint>> for Constraint {
    fn from(predicate: Arc<dyn RouteConstraint>) -> Self {
        Constraint::Predicate(predicate)
    }
}

impl From<RegexConstraint> for Constraint {
    fn from(constraint: RegexConstraint) -> Self {
        Constraint::predicate(constraint)
    }
}

impl From<MethodConstraint> for Constraint {
    fn from(constraint: MethodConstraint) -> Self {
        Constraint::predicate(constraint)
    }
}

/// Constraints keyed by parameter name, or by a generated key for global ones.
pub type RouteConstraints = RouteValueMap<Constraint>;

/// Requires the parameter value to match a regular expression in full.
///
/// The optional-parameter marker always satisfies the constraint; a missing
/// value never does.
#[derive(Debug, Clone)]
pub struct RegexConstraint {
    regex: Regex,
}

impl RegexConstraint {
    /// Compile `pattern`, anchored at both ends.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self { regex })
    }

    /// The anchored pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl RouteConstraint for RegexConstraint {
    fn matches(&self, ctx: &ConstraintContext<'_>) -> bool {
        match ctx.values.get(ctx.parameter) {
            Some(RouteValue::Optional) => true,
            Some(value) => self.regex.is_match(&value.to_string()),
            None => false,
        }
    }
}

/// Restricts a route to a set of HTTP methods.
#[derive(Debug, Clone)]
pub struct MethodConstraint {
    allowed: Vec<Method>,
}

impl MethodConstraint {
    /// Allow only the given methods.
    pub fn new(allowed: impl IntoIterator<Item = Method>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Parse method tokens such as `"GET"` into a constraint.
    pub fn parse<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self, Error> {
        let allowed = tokens
            .into_iter()
            .map(str::parse)
            .collect::<Result<Vec<Method>, Error>>()?;
        Ok(Self { allowed })
    }

    /// The allowed methods.
    pub fn allowed(&self) -> &[Method] {
        &self.allowed
    }
}

impl RouteConstraint for MethodConstraint {
    fn matches(&self, ctx: &ConstraintContext<'_>) -> bool {
        self.allowed.contains(&ctx.method)
    }
}
