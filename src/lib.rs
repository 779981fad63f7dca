//! Polymorphic resource routing for a civic participation platform.
//!
//! Given a budget investment, a legislation annotation, a milestone or any
//! other routable object, find the named route it belongs to and the ordered
//! ancestor ids that route expects, then render its path.
//!
//! ```
//! use civic_routes::{PathOptions, PolymorphicRoutes, RoutesConfig};
//! use civic_routes::resource::{Budget, Investment, ResourceId};
//!
//! let routes = PolymorphicRoutes::from_config(&RoutesConfig::default()).unwrap();
//! let investment = Investment {
//!     id: ResourceId(7),
//!     budget: Some(Budget { id: ResourceId(3) }),
//! };
//!
//! let path = routes.polymorphic_path(&investment, &PathOptions::default()).unwrap();
//! assert_eq!(path, "/budgets/3/investments/7");
//! ```

pub mod config;
pub mod observability;
pub mod resource;
pub mod routing;

pub use config::RoutesConfig;
pub use resource::{Resource, ResourceId, ResourceKind, Routable};
pub use routing::{PathOptions, PolymorphicRoutes, RouteTable, RoutingError, Scope};
