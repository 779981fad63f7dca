//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that every route shape is a chain the resource model can produce
//! - Check templates against their shapes
//! - Detect conflicting routes (same scope and shape, or same name,
//!   action-prefixed names included)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: routes → Result<(), Vec<ValidationError>>
//! - Runs before a route table is built, so lookups never see ambiguity

use std::collections::HashMap;

use thiserror::Error;
use url::Url;

use crate::config::schema::{RouteConfig, RoutesConfig, UrlConfig};
use crate::resource::{describe_shape, ResourceKind};
use crate::routing::scope::Scope;
use crate::routing::template::{is_identifier, PathTemplate, TemplateError};
use crate::routing::SHOW_ACTION;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route '{route}': shape is empty")]
    EmptyShape { route: String },

    #[error("route '{route}': {kind} is routed through '{association}' and cannot start a chain")]
    NotRoot {
        route: String,
        kind: ResourceKind,
        association: String,
    },

    #[error("route '{route}': {parent} cannot own {child}")]
    BrokenChain {
        route: String,
        parent: ResourceKind,
        child: ResourceKind,
    },

    #[error("route '{route}': {segments} segments for a shape of {shape} kinds")]
    SegmentCount {
        route: String,
        segments: usize,
        shape: usize,
    },

    #[error("route '{route}': invalid name segment '{segment}'")]
    InvalidSegment { route: String, segment: String },

    #[error("route '{route}': {source}")]
    Template {
        route: String,
        source: TemplateError,
    },

    #[error("route '{route}': {placeholders} placeholders for a shape of {shape} kinds")]
    PlaceholderCount {
        route: String,
        placeholders: usize,
        shape: usize,
    },

    #[error("route '{route}': invalid action '{action}'")]
    InvalidAction { route: String, action: String },

    #[error("routes '{first}' and '{second}' both map {scope} chain [{shape}]")]
    DuplicateShape {
        scope: Scope,
        shape: String,
        first: String,
        second: String,
    },

    #[error("route name '{route}' is registered more than once")]
    DuplicateName { route: String },

    #[error("url option '{option}': {reason}")]
    UrlOption { option: &'static str, reason: String },
}

/// Validate everything except the route list.
pub fn validate_config(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let errors = validate_url(&config.url);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Base URL (`protocol://host[:port]`) that absolute URLs are joined onto.
pub fn base_url(url: &UrlConfig) -> Result<Url, url::ParseError> {
    let authority = match url.port {
        Some(port) => format!("{}://{}:{}", url.protocol, url.host, port),
        None => format!("{}://{}", url.protocol, url.host),
    };
    Url::parse(&authority)
}

/// Check the default URL options, collecting every problem.
pub fn validate_url(url: &UrlConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let protocol_ok = url.protocol == "http" || url.protocol == "https";
    if !protocol_ok {
        errors.push(ValidationError::UrlOption {
            option: "protocol",
            reason: format!("expected http or https, got '{}'", url.protocol),
        });
    }
    if url.host.is_empty() {
        errors.push(ValidationError::UrlOption {
            option: "host",
            reason: "must not be empty".to_string(),
        });
    } else if protocol_ok {
        if let Err(e) = base_url(url) {
            errors.push(ValidationError::UrlOption {
                option: "host",
                reason: e.to_string(),
            });
        }
    }
    if !url.script_name.is_empty()
        && (!url.script_name.starts_with('/') || url.script_name.ends_with('/'))
    {
        errors.push(ValidationError::UrlOption {
            option: "script_name",
            reason: format!(
                "must start with '/' and not end with one, got '{}'",
                url.script_name
            ),
        });
    }

    errors
}

/// Validate a complete route list, built-in routes included.
pub fn validate_routes(routes: &[RouteConfig]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut shapes: HashMap<(Scope, &[ResourceKind]), String> = HashMap::new();
    let mut names: HashMap<String, usize> = HashMap::new();

    for route in routes {
        let label = route.path.clone();
        validate_shape(route, &label, &mut errors);
        validate_template(route, &label, &mut errors);

        for action in &route.actions {
            if action == SHOW_ACTION || !is_identifier(action) {
                errors.push(ValidationError::InvalidAction {
                    route: label.clone(),
                    action: action.clone(),
                });
            }
        }

        if route.shape.is_empty() {
            continue;
        }
        if let Some(first) = shapes.insert((route.scope, route.shape.as_slice()), label.clone()) {
            errors.push(ValidationError::DuplicateShape {
                scope: route.scope,
                shape: describe_shape(&route.shape),
                first,
                second: label.clone(),
            });
        }
        let name = route.name();
        for action in &route.actions {
            *names.entry(format!("{action}_{name}")).or_default() += 1;
        }
        *names.entry(name).or_default() += 1;
    }

    let mut duplicated: Vec<_> = names
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(route, _)| route)
        .collect();
    duplicated.sort();
    errors.extend(
        duplicated
            .into_iter()
            .map(|route| ValidationError::DuplicateName { route }),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_shape(route: &RouteConfig, label: &str, errors: &mut Vec<ValidationError>) {
    let Some(&root) = route.shape.first() else {
        errors.push(ValidationError::EmptyShape {
            route: label.to_string(),
        });
        return;
    };

    if let Some(association) = root.routing_association() {
        errors.push(ValidationError::NotRoot {
            route: label.to_string(),
            kind: root,
            association: association.to_string(),
        });
    }
    for pair in route.shape.windows(2) {
        let (parent, child) = (pair[0], pair[1]);
        if !child.parent_kinds().contains(&parent) {
            errors.push(ValidationError::BrokenChain {
                route: label.to_string(),
                parent,
                child,
            });
        }
    }

    let segments = route.segments();
    if segments.len() != route.shape.len() {
        errors.push(ValidationError::SegmentCount {
            route: label.to_string(),
            segments: segments.len(),
            shape: route.shape.len(),
        });
    }
    let namespace = route.namespace.iter();
    for segment in namespace.chain(segments.iter()) {
        if !is_identifier(segment) {
            errors.push(ValidationError::InvalidSegment {
                route: label.to_string(),
                segment: segment.clone(),
            });
        }
    }
}

fn validate_template(route: &RouteConfig, label: &str, errors: &mut Vec<ValidationError>) {
    match PathTemplate::parse(&route.path) {
        Ok(template) => {
            let placeholders = template.param_count();
            if placeholders != route.shape.len() {
                errors.push(ValidationError::PlaceholderCount {
                    route: label.to_string(),
                    placeholders,
                    shape: route.shape.len(),
                });
            }
        }
        Err(source) => errors.push(ValidationError::Template {
            route: label.to_string(),
            source,
        }),
    }
}
