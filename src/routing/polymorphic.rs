//! Polymorphic path and URL helpers.
//!
//! # Responsibilities
//! - `polymorphic_path` / `admin_polymorphic_path` for any routable object
//! - Absolute URLs from the configured default URL options
//! - Named-route helpers (`path_for("budget_investment", ..)`)
//!
//! # Design Decisions
//! - One entry point per scope; the scope decides the name prefix
//! - Format, query and anchor decorate the resolved path and never affect
//!   route selection
//! - Paths are cut from the absolute URL, so both are encoded alike

use std::sync::Arc;

use url::{Position, Url};

use crate::config::validation::{base_url, validate_url};
use crate::config::{ConfigError, RoutesConfig, UrlConfig, ValidationError};
use crate::resource::{ResourceId, Routable};
use crate::routing::error::RoutingError;
use crate::routing::resolver::ResolvedRoute;
use crate::routing::scope::Scope;
use crate::routing::table::RouteTable;
use crate::routing::template::is_identifier;

/// Options accepted by the path helpers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOptions {
    /// Member action (e.g. "edit"). `None` or "show" routes to the object.
    pub action: Option<String>,
    /// Response format appended as an extension (e.g. "json").
    pub format: Option<String>,
    pub anchor: Option<String>,
    pub query: Vec<(String, String)>,
}

impl PathOptions {
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Route helpers bound to a route table and default URL options.
#[derive(Debug, Clone)]
pub struct PolymorphicRoutes {
    table: Arc<RouteTable>,
    base_url: Url,
    script_name: String,
}

impl PolymorphicRoutes {
    pub fn new(table: Arc<RouteTable>, url: &UrlConfig) -> Result<Self, ConfigError> {
        let errors = validate_url(url);
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }
        let base_url = base_url(url).map_err(|e| {
            ConfigError::Validation(vec![ValidationError::UrlOption {
                option: "host",
                reason: e.to_string(),
            }])
        })?;

        Ok(Self {
            table,
            base_url,
            script_name: url.script_name.clone(),
        })
    }

    pub fn from_config(config: &RoutesConfig) -> Result<Self, ConfigError> {
        let table = RouteTable::from_config(config)?;
        Self::new(Arc::new(table), &config.url)
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn resolve(
        &self,
        scope: Scope,
        object: &dyn Routable,
        action: Option<&str>,
    ) -> Result<ResolvedRoute<'_>, RoutingError> {
        self.table.resolve(scope, object, action)
    }

    pub fn polymorphic_path(
        &self,
        object: &dyn Routable,
        options: &PathOptions,
    ) -> Result<String, RoutingError> {
        self.path_in(Scope::Public, object, options)
    }

    pub fn admin_polymorphic_path(
        &self,
        object: &dyn Routable,
        options: &PathOptions,
    ) -> Result<String, RoutingError> {
        self.path_in(Scope::Admin, object, options)
    }

    pub fn polymorphic_url(
        &self,
        object: &dyn Routable,
        options: &PathOptions,
    ) -> Result<Url, RoutingError> {
        self.url_in(Scope::Public, object, options)
    }

    pub fn admin_polymorphic_url(
        &self,
        object: &dyn Routable,
        options: &PathOptions,
    ) -> Result<Url, RoutingError> {
        self.url_in(Scope::Admin, object, options)
    }

    pub fn path_in(
        &self,
        scope: Scope,
        object: &dyn Routable,
        options: &PathOptions,
    ) -> Result<String, RoutingError> {
        self.url_in(scope, object, options).map(|url| relative(&url))
    }

    pub fn url_in(
        &self,
        scope: Scope,
        object: &dyn Routable,
        options: &PathOptions,
    ) -> Result<Url, RoutingError> {
        let resolved = self.resolve(scope, object, options.action.as_deref())?;
        self.to_url(resolved.path()?, options)
    }

    /// Path of a named route, as generated by a `*_path` helper.
    ///
    /// Action-prefixed names (`edit_admin_proposal_milestone`) are accepted.
    pub fn path_for(&self, name: &str, params: &[ResourceId]) -> Result<String, RoutingError> {
        let (route, action) = self
            .table
            .named(name)
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;
        let url = self.to_url(route.render(params, action)?, &PathOptions::default())?;
        Ok(relative(&url))
    }

    /// Absolute URL of a named route.
    pub fn url_for(&self, name: &str, params: &[ResourceId]) -> Result<Url, RoutingError> {
        let (route, action) = self
            .table
            .named(name)
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;
        self.to_url(route.render(params, action)?, &PathOptions::default())
    }

    /// Absolute URL for a rendered route path. Paths are always derived from
    /// this URL so both carry the same encoding.
    fn to_url(&self, path: String, options: &PathOptions) -> Result<Url, RoutingError> {
        let mut mounted = String::with_capacity(self.script_name.len() + path.len());
        mounted.push_str(&self.script_name);
        mounted.push_str(&path);
        if let Some(format) = &options.format {
            if !is_identifier(format) {
                return Err(RoutingError::InvalidFormat(format.clone()));
            }
            mounted.push('.');
            mounted.push_str(format);
        }

        let mut url = self.base_url.join(&mounted)?;
        if !options.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&options.query);
        }
        url.set_fragment(options.anchor.as_deref());
        Ok(url)
    }
}

/// Path, query and fragment of an absolute URL.
fn relative(url: &Url) -> String {
    url[Position::BeforePath..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Budget, Investment};

    fn investment() -> Investment {
        Investment {
            id: ResourceId(7),
            budget: Some(Budget { id: ResourceId(3) }),
        }
    }

    fn routes_with(url: UrlConfig) -> PolymorphicRoutes {
        let table = RouteTable::builtin().unwrap();
        PolymorphicRoutes::new(Arc::new(table), &url).unwrap()
    }

    #[test]
    fn test_path_decorations() {
        let routes = routes_with(UrlConfig::default());
        let options = PathOptions::default()
            .with_format("json")
            .with_query("filter", "selected & feasible")
            .with_anchor("comments");

        assert_eq!(
            routes.polymorphic_path(&investment(), &options).unwrap(),
            "/budgets/3/investments/7.json?filter=selected+%26+feasible#comments"
        );
    }

    #[test]
    fn test_script_name_prefix() {
        let routes = routes_with(UrlConfig {
            script_name: "/consul".into(),
            ..UrlConfig::default()
        });

        assert_eq!(
            routes
                .polymorphic_path(&investment(), &PathOptions::default())
                .unwrap(),
            "/consul/budgets/3/investments/7"
        );
        assert_eq!(
            routes
                .path_for("budget_investment", &[ResourceId(3), ResourceId(7)])
                .unwrap(),
            "/consul/budgets/3/investments/7"
        );
    }

    #[test]
    fn test_absolute_url() {
        let routes = routes_with(UrlConfig {
            protocol: "https".into(),
            host: "decide.example.org".into(),
            port: Some(8443),
            script_name: String::new(),
        });

        let url = routes
            .admin_polymorphic_url(&investment(), &PathOptions::action("edit"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://decide.example.org:8443/admin/budgets/3/budget_investments/7/edit"
        );

        let url = routes
            .url_for("budget", &[ResourceId(3)])
            .unwrap();
        assert_eq!(url.as_str(), "https://decide.example.org:8443/budgets/3");
    }

    #[test]
    fn test_url_query_and_fragment() {
        let routes = routes_with(UrlConfig::default());
        let options = PathOptions::default()
            .with_query("page", "2")
            .with_anchor("top");

        let url = routes.polymorphic_url(&investment(), &options).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost/budgets/3/investments/7?page=2#top"
        );
    }

    #[test]
    fn test_named_route_errors() {
        let routes = routes_with(UrlConfig::default());

        assert!(matches!(
            routes.path_for("budget_project", &[ResourceId(1)]),
            Err(RoutingError::UnknownRoute(name)) if name == "budget_project"
        ));
        assert!(matches!(
            routes.path_for("budget_investment", &[ResourceId(1)]),
            Err(RoutingError::ParamCount {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_anchor_encoded_like_url() {
        let routes = routes_with(UrlConfig::default());
        let options = PathOptions::default().with_anchor("a b\"c");

        let path = routes.polymorphic_path(&investment(), &options).unwrap();
        let url = routes.polymorphic_url(&investment(), &options).unwrap();
        assert_eq!(path, "/budgets/3/investments/7#a%20b%22c");
        assert!(url.as_str().ends_with(&path));
    }

    #[test]
    fn test_rejects_non_identifier_format() {
        let routes = routes_with(UrlConfig::default());
        let options = PathOptions::default().with_format("json?x=1#y");

        assert!(matches!(
            routes.polymorphic_path(&investment(), &options),
            Err(RoutingError::InvalidFormat(format)) if format == "json?x=1#y"
        ));
        assert!(matches!(
            routes.polymorphic_url(&investment(), &options),
            Err(RoutingError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_url_options() {
        let table = Arc::new(RouteTable::builtin().unwrap());

        let relative_mount = UrlConfig {
            script_name: "consul".into(),
            ..UrlConfig::default()
        };
        let ftp = UrlConfig {
            protocol: "ftp".into(),
            ..UrlConfig::default()
        };
        for url in [relative_mount, ftp] {
            match PolymorphicRoutes::new(table.clone(), &url) {
                Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 1),
                other => panic!("expected validation errors, got {:?}", other),
            }
        }

        let config = RoutesConfig {
            url: UrlConfig {
                protocol: "ftp".into(),
                script_name: "consul".into(),
                ..UrlConfig::default()
            },
            ..RoutesConfig::default()
        };
        match PolymorphicRoutes::from_config(&config) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_host() {
        let url = UrlConfig {
            host: "bad host".into(),
            ..UrlConfig::default()
        };
        let table = Arc::new(RouteTable::builtin().unwrap());
        assert!(matches!(
            PolymorphicRoutes::new(table, &url),
            Err(ConfigError::Validation(_))
        ));
    }
}
