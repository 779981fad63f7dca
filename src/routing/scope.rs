//! Route scopes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which helper family a route belongs to.
///
/// Public routes back `polymorphic_path`; admin routes back
/// `admin_polymorphic_path` and have their names prefixed with `admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Public,
    Admin,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Public => "public",
            Scope::Admin => "admin",
        }
    }

    /// Prefix prepended to every route name in this scope.
    pub fn name_prefix(self) -> Option<&'static str> {
        match self {
            Scope::Public => None,
            Scope::Admin => Some("admin"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a route name: scope prefix, namespace, then one segment per chain
/// element, joined by `_`.
pub fn route_name<S: AsRef<str>>(scope: Scope, namespace: Option<&str>, segments: &[S]) -> String {
    scope
        .name_prefix()
        .into_iter()
        .chain(namespace)
        .chain(segments.iter().map(|s| s.as_ref()))
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_name() {
        assert_eq!(
            route_name(Scope::Public, None, &["budget", "investment"]),
            "budget_investment"
        );
        assert_eq!(
            route_name(Scope::Admin, None, &["budget", "budget_investment", "milestone"]),
            "admin_budget_budget_investment_milestone"
        );
        assert_eq!(
            route_name(
                Scope::Public,
                Some("legislation"),
                &["process", "draft_version", "annotation"]
            ),
            "legislation_process_draft_version_annotation"
        );
    }
}
