//! Resource kinds and the associations that link them for routing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type tag carried by every routable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Budget,
    BudgetInvestment,
    LegislationProcess,
    LegislationProposal,
    LegislationQuestion,
    LegislationDraftVersion,
    LegislationAnnotation,
    Poll,
    PollQuestion,
    Proposal,
    Community,
    Topic,
    Milestone,
    ProgressBar,
    Audit,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 15] = [
        ResourceKind::Budget,
        ResourceKind::BudgetInvestment,
        ResourceKind::LegislationProcess,
        ResourceKind::LegislationProposal,
        ResourceKind::LegislationQuestion,
        ResourceKind::LegislationDraftVersion,
        ResourceKind::LegislationAnnotation,
        ResourceKind::Poll,
        ResourceKind::PollQuestion,
        ResourceKind::Proposal,
        ResourceKind::Community,
        ResourceKind::Topic,
        ResourceKind::Milestone,
        ResourceKind::ProgressBar,
        ResourceKind::Audit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Budget => "budget",
            ResourceKind::BudgetInvestment => "budget_investment",
            ResourceKind::LegislationProcess => "legislation_process",
            ResourceKind::LegislationProposal => "legislation_proposal",
            ResourceKind::LegislationQuestion => "legislation_question",
            ResourceKind::LegislationDraftVersion => "legislation_draft_version",
            ResourceKind::LegislationAnnotation => "legislation_annotation",
            ResourceKind::Poll => "poll",
            ResourceKind::PollQuestion => "poll_question",
            ResourceKind::Proposal => "proposal",
            ResourceKind::Community => "community",
            ResourceKind::Topic => "topic",
            ResourceKind::Milestone => "milestone",
            ResourceKind::ProgressBar => "progress_bar",
            ResourceKind::Audit => "audit",
        }
    }

    /// Route name segment used when a route does not spell its segments out.
    ///
    /// Legislation kinds drop their prefix because routes carry it as a
    /// namespace (`legislation_process_proposal`, not
    /// `legislation_process_legislation_proposal`).
    pub fn default_segment(self) -> &'static str {
        match self {
            ResourceKind::BudgetInvestment => "investment",
            ResourceKind::LegislationProcess => "process",
            ResourceKind::LegislationProposal => "proposal",
            ResourceKind::LegislationQuestion => "question",
            ResourceKind::LegislationDraftVersion => "draft_version",
            ResourceKind::LegislationAnnotation => "annotation",
            ResourceKind::PollQuestion => "question",
            other => other.as_str(),
        }
    }

    /// The association followed to reach this kind's routing parent.
    /// `None` for kinds that start a chain.
    pub fn routing_association(self) -> Option<Association> {
        match self {
            ResourceKind::BudgetInvestment => Some(Association::Budget),
            ResourceKind::LegislationProposal
            | ResourceKind::LegislationQuestion
            | ResourceKind::LegislationDraftVersion => Some(Association::Process),
            ResourceKind::LegislationAnnotation => Some(Association::DraftVersion),
            ResourceKind::Topic => Some(Association::Community),
            ResourceKind::Milestone => Some(Association::Milestoneable),
            ResourceKind::ProgressBar => Some(Association::Progressable),
            ResourceKind::Audit => Some(Association::Auditable),
            ResourceKind::Budget
            | ResourceKind::LegislationProcess
            | ResourceKind::Poll
            | ResourceKind::PollQuestion
            | ResourceKind::Proposal
            | ResourceKind::Community => None,
        }
    }

    pub fn is_root(self) -> bool {
        self.routing_association().is_none()
    }

    /// Kinds allowed directly above this one in a chain.
    pub fn parent_kinds(self) -> &'static [ResourceKind] {
        match self.routing_association() {
            Some(association) => association.target_kinds(),
            None => &[],
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named reference from an object to the resource that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Association {
    Budget,
    Process,
    DraftVersion,
    Community,
    /// Generic owner of a milestone.
    Milestoneable,
    /// Generic owner of a progress bar.
    Progressable,
    /// Generic owner of an audit record.
    Auditable,
}

const OWNER_KINDS: &[ResourceKind] = &[
    ResourceKind::Proposal,
    ResourceKind::BudgetInvestment,
    ResourceKind::LegislationProcess,
];

impl Association {
    pub fn as_str(self) -> &'static str {
        match self {
            Association::Budget => "budget",
            Association::Process => "process",
            Association::DraftVersion => "draft_version",
            Association::Community => "community",
            Association::Milestoneable => "milestoneable",
            Association::Progressable => "progressable",
            Association::Auditable => "auditable",
        }
    }

    /// Kinds the association may point at.
    pub fn target_kinds(self) -> &'static [ResourceKind] {
        match self {
            Association::Budget => &[ResourceKind::Budget],
            Association::Process => &[ResourceKind::LegislationProcess],
            Association::DraftVersion => &[ResourceKind::LegislationDraftVersion],
            Association::Community => &[ResourceKind::Community],
            Association::Milestoneable | Association::Progressable => OWNER_KINDS,
            Association::Auditable => &[ResourceKind::BudgetInvestment, ResourceKind::Proposal],
        }
    }

    /// Whether the concrete target type varies per instance.
    pub fn is_generic(self) -> bool {
        self.target_kinds().len() > 1
    }
}

impl fmt::Display for Association {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins kind names with `separator`.
pub fn join_kinds(kinds: &[ResourceKind], separator: &str) -> String {
    kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Renders a chain shape as `budget > budget_investment > milestone`.
pub fn describe_shape(shape: &[ResourceKind]) -> String {
    join_kinds(shape, " > ")
}
