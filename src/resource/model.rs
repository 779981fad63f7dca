//! Domain objects that can appear in a URL.
//!
//! Each object owns its ancestors by value, so an ancestor chain is always
//! finite and acyclic. Associations are optional because the surrounding
//! application may hand over partially loaded graphs; a missing routing
//! association is reported at resolution time.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::{Association, ResourceKind};

/// Persistent identifier of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ResourceId(pub u64);

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ResourceId> for u64 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the resource an object is routed under.
#[derive(Debug, Clone, Copy)]
pub enum Owner<'a> {
    /// The object starts a chain.
    Root,
    /// The object is nested under this parent.
    Parent(&'a dyn Routable),
    /// The routing association is not loaded.
    Missing(Association),
}

/// An object the resolver can walk.
pub trait Routable: fmt::Debug {
    fn kind(&self) -> ResourceKind;

    fn id(&self) -> ResourceId;

    /// The routing parent, following the kind's routing association.
    fn owner(&self) -> Owner<'_>;
}

fn owned_by<'a>(association: Association, parent: Option<&'a dyn Routable>) -> Owner<'a> {
    match parent {
        Some(parent) => Owner::Parent(parent),
        None => Owner::Missing(association),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Budget {
    pub id: ResourceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Investment {
    pub id: ResourceId,
    #[serde(default)]
    pub budget: Option<Budget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LegislationProcess {
    pub id: ResourceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LegislationProposal {
    pub id: ResourceId,
    #[serde(default)]
    pub process: Option<LegislationProcess>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LegislationQuestion {
    pub id: ResourceId,
    #[serde(default)]
    pub process: Option<LegislationProcess>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DraftVersion {
    pub id: ResourceId,
    #[serde(default)]
    pub process: Option<LegislationProcess>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Annotation {
    pub id: ResourceId,
    #[serde(default)]
    pub draft_version: Option<DraftVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Poll {
    pub id: ResourceId,
}

/// Poll questions are routed flat even when their poll is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PollQuestion {
    pub id: ResourceId,
    #[serde(default)]
    pub poll: Option<Poll>,
}

/// Proposals are routed flat; the community is not a routing owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Proposal {
    pub id: ResourceId,
    #[serde(default)]
    pub community: Option<Community>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Community {
    pub id: ResourceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    pub id: ResourceId,
    #[serde(default)]
    pub community: Option<Community>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Milestone {
    pub id: ResourceId,
    #[serde(default)]
    pub milestoneable: Option<Box<Resource>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProgressBar {
    pub id: ResourceId,
    #[serde(default)]
    pub progressable: Option<Box<Resource>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Audit {
    pub id: ResourceId,
    #[serde(default)]
    pub auditable: Option<Box<Resource>>,
}

macro_rules! routable {
    ($ty:ty, $kind:ident) => {
        impl Routable for $ty {
            fn kind(&self) -> ResourceKind {
                ResourceKind::$kind
            }

            fn id(&self) -> ResourceId {
                self.id
            }

            fn owner(&self) -> Owner<'_> {
                Owner::Root
            }
        }
    };
    ($ty:ty, $kind:ident, $field:ident => $association:ident) => {
        impl Routable for $ty {
            fn kind(&self) -> ResourceKind {
                ResourceKind::$kind
            }

            fn id(&self) -> ResourceId {
                self.id
            }

            fn owner(&self) -> Owner<'_> {
                owned_by(
                    Association::$association,
                    self.$field.as_ref().map(|parent| parent as &dyn Routable),
                )
            }
        }
    };
    ($ty:ty, $kind:ident, dyn $field:ident => $association:ident) => {
        impl Routable for $ty {
            fn kind(&self) -> ResourceKind {
                ResourceKind::$kind
            }

            fn id(&self) -> ResourceId {
                self.id
            }

            fn owner(&self) -> Owner<'_> {
                owned_by(
                    Association::$association,
                    self.$field.as_deref().map(|parent| parent as &dyn Routable),
                )
            }
        }
    };
}

routable!(Budget, Budget);
routable!(Investment, BudgetInvestment, budget => Budget);
routable!(LegislationProcess, LegislationProcess);
routable!(LegislationProposal, LegislationProposal, process => Process);
routable!(LegislationQuestion, LegislationQuestion, process => Process);
routable!(DraftVersion, LegislationDraftVersion, process => Process);
routable!(Annotation, LegislationAnnotation, draft_version => DraftVersion);
routable!(Poll, Poll);
routable!(PollQuestion, PollQuestion);
routable!(Proposal, Proposal);
routable!(Community, Community);
routable!(Topic, Topic, community => Community);
routable!(Milestone, Milestone, dyn milestoneable => Milestoneable);
routable!(ProgressBar, ProgressBar, dyn progressable => Progressable);
routable!(Audit, Audit, dyn auditable => Auditable);

/// Any routable object, tagged with its kind.
///
/// This is the variant used for generic owners: a milestone's
/// `milestoneable` may be a proposal, an investment or a process, and the
/// resolver inspects the variant to continue the walk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
    Budget(Budget),
    BudgetInvestment(Investment),
    LegislationProcess(LegislationProcess),
    LegislationProposal(LegislationProposal),
    LegislationQuestion(LegislationQuestion),
    LegislationDraftVersion(DraftVersion),
    LegislationAnnotation(Annotation),
    Poll(Poll),
    PollQuestion(PollQuestion),
    Proposal(Proposal),
    Community(Community),
    Topic(Topic),
    Milestone(Milestone),
    ProgressBar(ProgressBar),
    Audit(Audit),
}

impl Resource {
    fn as_routable(&self) -> &dyn Routable {
        match self {
            Resource::Budget(r) => r,
            Resource::BudgetInvestment(r) => r,
            Resource::LegislationProcess(r) => r,
            Resource::LegislationProposal(r) => r,
            Resource::LegislationQuestion(r) => r,
            Resource::LegislationDraftVersion(r) => r,
            Resource::LegislationAnnotation(r) => r,
            Resource::Poll(r) => r,
            Resource::PollQuestion(r) => r,
            Resource::Proposal(r) => r,
            Resource::Community(r) => r,
            Resource::Topic(r) => r,
            Resource::Milestone(r) => r,
            Resource::ProgressBar(r) => r,
            Resource::Audit(r) => r,
        }
    }
}

impl Routable for Resource {
    fn kind(&self) -> ResourceKind {
        self.as_routable().kind()
    }

    fn id(&self) -> ResourceId {
        self.as_routable().id()
    }

    fn owner(&self) -> Owner<'_> {
        self.as_routable().owner()
    }
}

macro_rules! into_resource {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Resource {
                fn from(value: $ty) -> Self {
                    Resource::$variant(value)
                }
            }
        )*
    };
}

into_resource!(
    Budget => Budget,
    Investment => BudgetInvestment,
    LegislationProcess => LegislationProcess,
    LegislationProposal => LegislationProposal,
    LegislationQuestion => LegislationQuestion,
    DraftVersion => LegislationDraftVersion,
    Annotation => LegislationAnnotation,
    Poll => Poll,
    PollQuestion => PollQuestion,
    Proposal => Proposal,
    Community => Community,
    Topic => Topic,
    Milestone => Milestone,
    ProgressBar => ProgressBar,
    Audit => Audit,
);
