//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → default_routes.toml (built-in table, unless disabled)
//!     → validation.rs (semantic checks over the combined route list)
//!     → RoutesConfig (validated, immutable)
//!     → RouteTable::from_config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a new route table
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{builtin_routes, load_config, ConfigError};
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::RouteConfig;
pub use schema::RoutesConfig;
pub use schema::UrlConfig;
pub use validation::ValidationError;
