//! Mock implementations of port traits for testing
//!
//! These mocks fail every lookup so error mapping can be tested without a
//! real backend.

use scrumkit::core::models::{
    MilestoneId, ProjectId, StatusId, Task, TaskId, UserId, UserStoryId,
};
use scrumkit::core::ports::{Catalog, NeighborResolver, Neighbors, TagIndex, VoteLedger};

/// Every lookup returns an error, as a database that is down would
pub struct BrokenBackend;

impl TagIndex for BrokenBackend {
    fn tag_exists(&self, _project: ProjectId, _tag: &str) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }
}

impl Catalog for BrokenBackend {
    fn project_exists(&self, _id: ProjectId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }

    fn milestone_exists(&self, _id: MilestoneId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }

    fn status_exists(&self, _id: StatusId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }

    fn user_story_exists(&self, _id: UserStoryId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }

    fn task_exists(&self, _id: TaskId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }

    fn is_member(&self, _project: ProjectId, _user: UserId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }
}

impl NeighborResolver for BrokenBackend {
    fn neighbors(&self, _task: &Task) -> anyhow::Result<Neighbors> {
        anyhow::bail!("connection refused")
    }
}

impl VoteLedger for BrokenBackend {
    fn total_voters(&self, _task: TaskId) -> anyhow::Result<u64> {
        anyhow::bail!("connection refused")
    }

    fn is_voter(&self, _task: TaskId, _user: UserId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }
}
