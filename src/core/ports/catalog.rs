//! Catalog port
//!
//! Existence and membership lookups for the records a request may reference.

use crate::core::models::{MilestoneId, ProjectId, StatusId, TaskId, UserId, UserStoryId};

/// Read-only lookups against persisted records
pub trait Catalog: Send + Sync {
    /// Whether a project with this ID exists
    fn project_exists(&self, id: ProjectId) -> anyhow::Result<bool>;

    /// Whether a milestone (sprint) with this ID exists
    fn milestone_exists(&self, id: MilestoneId) -> anyhow::Result<bool>;

    /// Whether a task status with this ID exists
    fn status_exists(&self, id: StatusId) -> anyhow::Result<bool>;

    /// Whether a user story with this ID exists
    fn user_story_exists(&self, id: UserStoryId) -> anyhow::Result<bool>;

    /// Whether a task with this ID exists
    fn task_exists(&self, id: TaskId) -> anyhow::Result<bool>;

    /// Whether `user` is a member of `project`
    fn is_member(&self, project: ProjectId, user: UserId) -> anyhow::Result<bool>;
}
