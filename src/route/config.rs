//! Route table configuration.

/// What a route table does when a route name is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateRoutePolicy {
    /// Fail with [`Error::DuplicateRouteName`](crate::RouteError::DuplicateRouteName).
    #[default]
    Reject,
    /// Discard the existing route and register a fresh one in its place.
    Replace,
    /// Return the existing route with its path updated.
    Reuse,
}

/// Route table configuration.
#[derive(Debug, Clone, Default)]
pub struct RouteTableConfig {
    /// How repeated route names are handled.
    pub duplicate_policy: DuplicateRoutePolicy,
}
