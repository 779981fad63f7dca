//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use civic_routes::resource::{
    Annotation, Audit, Budget, Community, DraftVersion, Investment, LegislationProcess,
    LegislationProposal, LegislationQuestion, Milestone, Poll, PollQuestion, ProgressBar,
    Proposal, Resource, ResourceId, Topic,
};
use civic_routes::PolymorphicRoutes;
use civic_routes::RoutesConfig;

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// A fresh id, unique across the test binary.
pub fn next_id() -> ResourceId {
    ResourceId(SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Helpers over the built-in route table with default URL options.
pub fn routes() -> PolymorphicRoutes {
    PolymorphicRoutes::from_config(&RoutesConfig::default()).unwrap()
}

pub fn create_budget() -> Budget {
    Budget { id: next_id() }
}

pub fn create_investment(budget: &Budget) -> Investment {
    Investment {
        id: next_id(),
        budget: Some(budget.clone()),
    }
}

pub fn create_legislation_process() -> LegislationProcess {
    LegislationProcess { id: next_id() }
}

pub fn create_legislation_proposal(process: &LegislationProcess) -> LegislationProposal {
    LegislationProposal {
        id: next_id(),
        process: Some(process.clone()),
    }
}

pub fn create_legislation_question(process: &LegislationProcess) -> LegislationQuestion {
    LegislationQuestion {
        id: next_id(),
        process: Some(process.clone()),
    }
}

pub fn create_draft_version(process: &LegislationProcess) -> DraftVersion {
    DraftVersion {
        id: next_id(),
        process: Some(process.clone()),
    }
}

pub fn create_annotation(draft_version: &DraftVersion) -> Annotation {
    Annotation {
        id: next_id(),
        draft_version: Some(draft_version.clone()),
    }
}

pub fn create_poll_question() -> PollQuestion {
    PollQuestion {
        id: next_id(),
        poll: Some(Poll { id: next_id() }),
    }
}

/// A proposal together with its community.
pub fn create_proposal() -> Proposal {
    Proposal {
        id: next_id(),
        community: Some(Community { id: next_id() }),
    }
}

pub fn create_topic(community: &Community) -> Topic {
    Topic {
        id: next_id(),
        community: Some(community.clone()),
    }
}

pub fn create_milestone(milestoneable: impl Into<Resource>) -> Milestone {
    Milestone {
        id: next_id(),
        milestoneable: Some(Box::new(milestoneable.into())),
    }
}

pub fn create_progress_bar(progressable: impl Into<Resource>) -> ProgressBar {
    ProgressBar {
        id: next_id(),
        progressable: Some(Box::new(progressable.into())),
    }
}

pub fn create_audit(auditable: impl Into<Resource>) -> Audit {
    Audit {
        id: next_id(),
        auditable: Some(Box::new(auditable.into())),
    }
}
