//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::schema::{RouteConfig, RoutesConfig};
use crate::config::validation::{validate_config, validate_routes, ValidationError};

/// The platform's route table, shipped with the crate.
const BUILTIN_ROUTES: &str = include_str!("default_routes.toml");

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Deserialize)]
struct RouteFile {
    routes: Vec<RouteConfig>,
}

/// Parse the built-in route table.
pub fn builtin_routes() -> Result<Vec<RouteConfig>, ConfigError> {
    let file: RouteFile = toml::from_str(BUILTIN_ROUTES)?;
    Ok(file.routes)
}

impl RoutesConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RoutesConfig = toml::from_str(content)?;

        let mut errors = validate_config(&config).err().unwrap_or_default();
        if let Err(route_errors) = validate_routes(&config.effective_routes()?) {
            errors.extend(route_errors);
        }
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }

        Ok(config)
    }

    /// Built-in routes (when enabled) followed by configured ones.
    pub fn effective_routes(&self) -> Result<Vec<RouteConfig>, ConfigError> {
        let mut routes = if self.default_routes {
            builtin_routes()?
        } else {
            Vec::new()
        };
        routes.extend(self.routes.iter().cloned());
        Ok(routes)
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RoutesConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = RoutesConfig::from_toml_str(&content)?;

    tracing::debug!(
        path = %path.display(),
        routes = config.routes.len(),
        default_routes = config.default_routes,
        "Configuration loaded"
    );
    Ok(config)
}
