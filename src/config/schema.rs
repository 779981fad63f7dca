//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! table and its helpers. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};

use crate::resource::ResourceKind;
use crate::routing::scope::{route_name, Scope};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Load the platform's built-in route table before `routes`.
    pub default_routes: bool,

    /// Default URL options for absolute URLs.
    pub url: UrlConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Additional route definitions.
    pub routes: Vec<RouteConfig>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            default_routes: true,
            url: UrlConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: Vec::new(),
        }
    }
}

/// Default URL options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UrlConfig {
    /// `http` or `https`.
    pub protocol: String,

    pub host: String,

    pub port: Option<u16>,

    /// Mount prefix prepended to every path (e.g. "/consul"). Empty when the
    /// application is served from the root.
    pub script_name: String,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            host: "localhost".to_string(),
            port: None,
            script_name: String::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (e.g. "info" or "civic_routes=debug").
    pub log_level: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// A route descriptor as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Helper family the route belongs to.
    #[serde(default)]
    pub scope: Scope,

    /// Name prefix placed after the scope prefix (e.g. "legislation").
    #[serde(default)]
    pub namespace: Option<String>,

    /// Resource kinds from the chain root down to the routed object.
    pub shape: Vec<ResourceKind>,

    /// Route name segments, one per shape element. Defaults to each kind's
    /// default segment.
    #[serde(default)]
    pub segments: Option<Vec<String>>,

    /// Path template with one `{placeholder}` per shape element.
    pub path: String,

    /// Member actions besides show (e.g. "edit").
    #[serde(default)]
    pub actions: Vec<String>,
}

impl RouteConfig {
    pub fn segments(&self) -> Vec<String> {
        match &self.segments {
            Some(segments) => segments.clone(),
            None => self
                .shape
                .iter()
                .map(|kind| kind.default_segment().to_string())
                .collect(),
        }
    }

    pub fn name(&self) -> String {
        route_name(self.scope, self.namespace.as_deref(), &self.segments())
    }
}
