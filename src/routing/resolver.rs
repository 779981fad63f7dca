//! Polymorphic route resolution.
//!
//! # Responsibilities
//! - Walk an object's routing associations up to the chain root
//! - Pick the route registered for the chain shape
//! - Produce the ordered parameter list (root id first, object id last)
//!
//! # Design Decisions
//! - Pure function of the object graph: no caching, no state
//! - Generic owners are followed through whatever concrete kind they hold,
//!   so chain depth varies per instance
//! - The show action is implicit and never part of a route name

use crate::resource::{describe_shape, Owner, ResourceId, ResourceKind, Routable};
use crate::routing::error::RoutingError;
use crate::routing::scope::Scope;
use crate::routing::table::{RouteDescriptor, RouteTable};
use crate::routing::SHOW_ACTION;

/// One element of an ancestor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLink {
    pub kind: ResourceKind,
    pub id: ResourceId,
}

impl ChainLink {
    fn of(object: &dyn Routable) -> Self {
        Self {
            kind: object.kind(),
            id: object.id(),
        }
    }
}

/// The object and its ancestors, ordered root first.
pub fn ancestor_chain(object: &dyn Routable) -> Result<Vec<ChainLink>, RoutingError> {
    let mut chain = vec![ChainLink::of(object)];
    let mut current = object;

    loop {
        match current.owner() {
            Owner::Root => break,
            Owner::Parent(parent) => {
                chain.push(ChainLink::of(parent));
                current = parent;
            }
            Owner::Missing(association) => {
                return Err(RoutingError::MissingAncestor {
                    kind: current.kind(),
                    association,
                });
            }
        }
    }

    chain.reverse();
    Ok(chain)
}

/// A route chosen for a specific object.
#[derive(Debug, Clone)]
pub struct ResolvedRoute<'a> {
    pub route: &'a RouteDescriptor,
    /// Member action, `None` for show.
    pub action: Option<String>,
    /// Root ancestor id first, the object's own id last.
    pub params: Vec<ResourceId>,
}

impl ResolvedRoute<'_> {
    /// Route name including the action prefix.
    pub fn name(&self) -> String {
        self.route.name_for(self.action.as_deref())
    }

    /// Path relative to the application root.
    pub fn path(&self) -> Result<String, RoutingError> {
        self.route.render(&self.params, self.action.as_deref())
    }
}

pub fn resolve<'t>(
    table: &'t RouteTable,
    scope: Scope,
    object: &dyn Routable,
    action: Option<&str>,
) -> Result<ResolvedRoute<'t>, RoutingError> {
    let action = action.filter(|action| *action != SHOW_ACTION);
    let chain = ancestor_chain(object)?;
    let shape: Vec<ResourceKind> = chain.iter().map(|link| link.kind).collect();

    let route = table
        .lookup(scope, &shape)
        .ok_or_else(|| RoutingError::UnroutableObject {
            scope,
            kind: object.kind(),
            shape: describe_shape(&shape),
        })?;

    if let Some(action) = action {
        if !route.supports(action) {
            return Err(RoutingError::UnknownAction {
                route: route.name().to_string(),
                action: action.to_string(),
            });
        }
    }

    let resolved = ResolvedRoute {
        route,
        action: action.map(str::to_string),
        params: chain.iter().map(|link| link.id).collect(),
    };

    tracing::debug!(
        scope = %scope,
        kind = %object.kind(),
        id = %object.id(),
        route = %resolved.name(),
        "Resolved polymorphic route"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{
        Annotation, Association, Budget, DraftVersion, Investment, LegislationProcess, Milestone,
        Proposal, Resource,
    };

    fn investment(budget: u64, id: u64) -> Investment {
        Investment {
            id: ResourceId(id),
            budget: Some(Budget {
                id: ResourceId(budget),
            }),
        }
    }

    #[test]
    fn test_chain_is_root_first() {
        let annotation = Annotation {
            id: ResourceId(9),
            draft_version: Some(DraftVersion {
                id: ResourceId(2),
                process: Some(LegislationProcess { id: ResourceId(1) }),
            }),
        };

        let chain = ancestor_chain(&annotation).unwrap();
        assert_eq!(
            chain,
            vec![
                ChainLink {
                    kind: ResourceKind::LegislationProcess,
                    id: ResourceId(1)
                },
                ChainLink {
                    kind: ResourceKind::LegislationDraftVersion,
                    id: ResourceId(2)
                },
                ChainLink {
                    kind: ResourceKind::LegislationAnnotation,
                    id: ResourceId(9)
                },
            ]
        );
    }

    #[test]
    fn test_missing_ancestor_deep_in_chain() {
        let annotation = Annotation {
            id: ResourceId(9),
            draft_version: Some(DraftVersion {
                id: ResourceId(2),
                process: None,
            }),
        };

        match ancestor_chain(&annotation) {
            Err(RoutingError::MissingAncestor { kind, association }) => {
                assert_eq!(kind, ResourceKind::LegislationDraftVersion);
                assert_eq!(association, Association::Process);
            }
            other => panic!("expected a missing ancestor, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_investment() {
        let table = RouteTable::builtin().unwrap();
        let resolved = resolve(&table, Scope::Public, &investment(3, 7), None).unwrap();

        assert_eq!(resolved.name(), "budget_investment");
        assert_eq!(resolved.params, vec![ResourceId(3), ResourceId(7)]);
        assert_eq!(resolved.path().unwrap(), "/budgets/3/investments/7");
    }

    #[test]
    fn test_show_action_is_implicit() {
        let table = RouteTable::builtin().unwrap();
        let resolved = resolve(&table, Scope::Public, &investment(3, 7), Some("show")).unwrap();
        assert_eq!(resolved.action, None);
        assert_eq!(resolved.name(), "budget_investment");
    }

    #[test]
    fn test_action_keeps_params() {
        let table = RouteTable::builtin().unwrap();
        let object = investment(3, 7);

        let show = resolve(&table, Scope::Admin, &object, None).unwrap();
        let edit = resolve(&table, Scope::Admin, &object, Some("edit")).unwrap();
        assert_eq!(edit.name(), format!("edit_{}", show.name()));
        assert_eq!(edit.params, show.params);
    }

    #[test]
    fn test_unknown_action() {
        let table = RouteTable::builtin().unwrap();
        let err = resolve(&table, Scope::Public, &investment(3, 7), Some("destroy")).unwrap_err();
        assert!(matches!(err, RoutingError::UnknownAction { .. }));
    }

    #[test]
    fn test_unroutable_in_scope() {
        let table = RouteTable::builtin().unwrap();
        let milestone = Milestone {
            id: ResourceId(5),
            milestoneable: Some(Box::new(Resource::Proposal(Proposal {
                id: ResourceId(1),
                community: None,
            }))),
        };

        let err = resolve(&table, Scope::Public, &milestone, None).unwrap_err();
        match err {
            RoutingError::UnroutableObject { scope, kind, shape } => {
                assert_eq!(scope, Scope::Public);
                assert_eq!(kind, ResourceKind::Milestone);
                assert_eq!(shape, "proposal > milestone");
            }
            other => panic!("expected an unroutable object, got {:?}", other),
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = RouteTable::builtin().unwrap();
        let object = investment(3, 7);

        let first = resolve(&table, Scope::Public, &object, None).unwrap();
        let second = resolve(&table, Scope::Public, &object, None).unwrap();
        assert_eq!(first.name(), second.name());
        assert_eq!(first.params, second.params);
    }
}
