//! Routable domain objects.
//!
//! # Data Flow
//! ```text
//! Application / persistence layer
//!     → model.rs (typed objects, owners held by value)
//!     → Routable::owner() (one routing association per kind)
//!     → kind.rs (type tag, permitted parent kinds)
//! ```
//!
//! # Design Decisions
//! - Generic owners (milestoneable, progressable, auditable) are a tagged
//!   union over concrete kinds rather than a string type column
//! - Non-routing associations (a poll question's poll, a proposal's
//!   community) are carried but never followed
//! - Objects are read-only to the resolver

pub mod kind;
pub mod model;

pub use kind::{describe_shape, join_kinds, Association, ResourceKind};
pub use model::{
    Annotation, Audit, Budget, Community, DraftVersion, Investment, LegislationProcess,
    LegislationProposal, LegislationQuestion, Milestone, Owner, Poll, PollQuestion, ProgressBar,
    Proposal, Resource, ResourceId, Routable, Topic,
};
