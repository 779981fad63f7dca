//! Routing error definitions.

use thiserror::Error;

use crate::resource::{Association, ResourceKind};
use crate::routing::scope::Scope;

/// Errors raised while turning an object into a route.
///
/// None of these are transient: they signal a missing route registration or
/// an incompletely loaded object graph.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// No route is registered for the object's chain shape in this scope.
    #[error("no {scope} route for {kind} with chain [{shape}]")]
    UnroutableObject {
        scope: Scope,
        kind: ResourceKind,
        shape: String,
    },

    /// A routing association required by the object's kind is not loaded.
    #[error("{kind} has no '{association}' to route through")]
    MissingAncestor {
        kind: ResourceKind,
        association: Association,
    },

    /// The matched route does not declare the requested member action.
    #[error("route '{route}' has no '{action}' action")]
    UnknownAction { route: String, action: String },

    /// No route carries this name.
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    /// A named route was called with the wrong number of parameters.
    #[error("route '{route}' takes {expected} parameters, got {actual}")]
    ParamCount {
        route: String,
        expected: usize,
        actual: usize,
    },

    /// The requested format is not a plain extension such as `json`.
    #[error("invalid format '{0}'")]
    InvalidFormat(String),

    /// The configured host could not be combined into an absolute URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}
