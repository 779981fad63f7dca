//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled route descriptors
//! - Look up the descriptor for a (scope, chain shape)
//! - Look up a descriptor by name, action-prefixed names included
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) shape and name lookup via HashMap
//! - Explicit `None` rather than a fallback route

use std::collections::HashMap;

use crate::config::validation::validate_routes;
use crate::config::{builtin_routes, ConfigError, RouteConfig, RoutesConfig, ValidationError};
use crate::resource::{join_kinds, ResourceId, ResourceKind, Routable};
use crate::routing::error::RoutingError;
use crate::routing::resolver::{self, ResolvedRoute};
use crate::routing::scope::{route_name, Scope};
use crate::routing::template::{PathTemplate, TemplateError};

/// A compiled route.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    name: String,
    scope: Scope,
    shape: Vec<ResourceKind>,
    template: PathTemplate,
    actions: Vec<String>,
}

impl RouteDescriptor {
    fn compile(config: &RouteConfig) -> Result<Self, TemplateError> {
        Ok(Self {
            name: route_name(config.scope, config.namespace.as_deref(), &config.segments()),
            scope: config.scope,
            shape: config.shape.clone(),
            template: PathTemplate::parse(&config.path)?,
            actions: config.actions.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Kinds from the chain root down to the routed object.
    pub fn shape(&self) -> &[ResourceKind] {
        &self.shape
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn supports(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    /// Route name, prefixed with the action when there is one.
    pub fn name_for(&self, action: Option<&str>) -> String {
        match action {
            Some(action) => format!("{}_{}", action, self.name),
            None => self.name.clone(),
        }
    }

    /// Render the path for `params`, with `/{action}` appended for member
    /// actions.
    pub fn render(&self, params: &[ResourceId], action: Option<&str>) -> Result<String, RoutingError> {
        let mut path = self
            .template
            .render(params)
            .map_err(|_| RoutingError::ParamCount {
                route: self.name_for(action),
                expected: self.shape.len(),
                actual: params.len(),
            })?;

        if let Some(action) = action {
            path.push('/');
            path.push_str(action);
        }
        Ok(path)
    }
}

/// The compiled route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    by_shape: HashMap<Scope, HashMap<Vec<ResourceKind>, usize>>,
    /// Route name (plain or action-prefixed) -> (route index, action).
    by_name: HashMap<String, (usize, Option<String>)>,
}

impl RouteTable {
    /// Validate and compile a complete route list.
    pub fn from_routes(configs: Vec<RouteConfig>) -> Result<Self, ConfigError> {
        validate_routes(&configs).map_err(ConfigError::Validation)?;

        let mut table = Self {
            routes: Vec::with_capacity(configs.len()),
            by_shape: HashMap::new(),
            by_name: HashMap::new(),
        };

        for config in &configs {
            let route = RouteDescriptor::compile(config).map_err(|source| {
                ConfigError::Validation(vec![ValidationError::Template {
                    route: config.path.clone(),
                    source,
                }])
            })?;

            let index = table.routes.len();
            table
                .by_shape
                .entry(route.scope)
                .or_default()
                .insert(route.shape.clone(), index);
            for action in &route.actions {
                table
                    .by_name
                    .insert(route.name_for(Some(action.as_str())), (index, Some(action.clone())));
            }
            table.by_name.insert(route.name.clone(), (index, None));
            table.routes.push(route);
        }

        tracing::info!(routes = table.routes.len(), "Route table built");
        for scope in [Scope::Public, Scope::Admin] {
            let unroutable = table.unroutable_kinds(scope);
            if !unroutable.is_empty() {
                tracing::debug!(
                    scope = %scope,
                    kinds = %join_kinds(&unroutable, ", "),
                    "Kinds without a route in scope"
                );
            }
        }

        Ok(table)
    }

    /// Build from configuration: built-in routes (if enabled) plus
    /// configured ones.
    pub fn from_config(config: &RoutesConfig) -> Result<Self, ConfigError> {
        Self::from_routes(config.effective_routes()?)
    }

    /// The platform's built-in route table.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_routes(builtin_routes()?)
    }

    pub fn lookup(&self, scope: Scope, shape: &[ResourceKind]) -> Option<&RouteDescriptor> {
        self.by_shape
            .get(&scope)
            .and_then(|shapes| shapes.get(shape))
            .map(|&index| &self.routes[index])
    }

    /// Find a route by name. `edit_admin_proposal_milestone` yields the
    /// `admin_proposal_milestone` route and the `edit` action.
    pub fn named(&self, name: &str) -> Option<(&RouteDescriptor, Option<&str>)> {
        self.by_name
            .get(name)
            .map(|(index, action)| (&self.routes[*index], action.as_deref()))
    }

    /// Resolve `object` to a route in `scope`.
    pub fn resolve(
        &self,
        scope: Scope,
        object: &dyn Routable,
        action: Option<&str>,
    ) -> Result<ResolvedRoute<'_>, RoutingError> {
        resolver::resolve(self, scope, object, action)
    }

    /// Kinds that no route in `scope` ends with.
    pub fn unroutable_kinds(&self, scope: Scope) -> Vec<ResourceKind> {
        let routed: Vec<ResourceKind> = self
            .routes
            .iter()
            .filter(|route| route.scope == scope)
            .filter_map(|route| route.shape.last().copied())
            .collect();

        ResourceKind::ALL
            .into_iter()
            .filter(|kind| !routed.contains(kind))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
