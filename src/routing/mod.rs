//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Routable object (+ optional action)
//!     → resolver.rs (walk owners to the chain root)
//!     → table.rs (look up (scope, chain shape))
//!     → Return: ResolvedRoute or UnroutableObject / MissingAncestor
//!     → template.rs (interpolate ordered params into a path)
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Validate every shape, template and name
//!     → Compile templates, index by shape and by name
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - At most one route per (scope, shape), enforced before the table exists
//! - Deterministic: same object graph always resolves to the same route
//! - Explicit errors rather than a fallback route

pub mod error;
pub mod polymorphic;
pub mod resolver;
pub mod scope;
pub mod table;
pub mod template;

pub use error::RoutingError;
pub use polymorphic::{PathOptions, PolymorphicRoutes};
pub use resolver::{ancestor_chain, ChainLink, ResolvedRoute};
pub use scope::Scope;
pub use table::{RouteDescriptor, RouteTable};
pub use template::{PathTemplate, TemplateError};

/// The implicit action; never part of a route name or path.
pub const SHOW_ACTION: &str = "show";
