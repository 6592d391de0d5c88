//! Task model
//!
//! A task is a unit of work inside a project. It can be planned into a
//! milestone (sprint) and grouped under a user story. Related records are
//! carried resolved, so derived values like [`Task::is_closed`] need no lookup.

use chrono::{DateTime, Utc};

use super::{Milestone, ProjectRef, Status, TagWithColor, TaskId, User, UserId, UserStoryId};

/// A task with its related records loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Project-local reference number
    pub reference: u64,
    /// Owning project
    pub project: ProjectRef,
    /// Sprint the task is planned into
    pub milestone: Option<Milestone>,
    /// Parent user story
    pub user_story: Option<UserStoryId>,
    /// Current status
    pub status: Option<Status>,
    /// Assignee
    pub assigned_to: Option<User>,
    /// Creator
    pub owner: Option<User>,
    /// When the task was created
    pub created_date: DateTime<Utc>,
    /// Last modification
    pub modified_date: DateTime<Utc>,
    /// When the task was closed
    pub finished_date: Option<DateTime<Utc>>,
    /// Subject line
    pub subject: String,
    /// Markdown description
    pub description: String,
    /// Position inside its user story
    pub us_order: i64,
    /// Position on the taskboard
    pub taskboard_order: i64,
    /// Flag for tasks that need extra attention
    pub is_iocaine: bool,
    /// Identifier in an external system, e.g. `["github", "123"]`
    pub external_reference: Option<Vec<String>>,
    /// Optimistic-locking version
    pub version: u32,
    /// Users watching the task
    pub watchers: Vec<UserId>,
    /// Whether the task is blocked
    pub is_blocked: bool,
    /// Markdown explanation of the block
    pub blocked_note: String,
    /// Tags with their colors
    pub tags: Vec<TagWithColor>,
}

impl Task {
    /// Create a task with the given identity and defaults for everything else
    #[must_use]
    pub fn new(id: TaskId, reference: u64, project: ProjectRef, subject: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            reference,
            project,
            milestone: None,
            user_story: None,
            status: None,
            assigned_to: None,
            owner: None,
            created_date: now,
            modified_date: now,
            finished_date: None,
            subject: subject.into(),
            description: String::new(),
            us_order: 0,
            taskboard_order: 0,
            is_iocaine: false,
            external_reference: None,
            version: 1,
            watchers: Vec::new(),
            is_blocked: false,
            blocked_note: String::new(),
            tags: Vec::new(),
        }
    }

    /// True iff a status is assigned and that status is closed
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status.as_ref().is_some_and(|s| s.is_closed)
    }

    /// Slug of the assigned milestone, if any
    #[must_use]
    pub fn milestone_slug(&self) -> Option<&str> {
        self.milestone.as_ref().map(|m| m.slug.as_str())
    }

    /// Whether `user` watches this task
    #[must_use]
    pub fn is_watched_by(&self, user: UserId) -> bool {
        self.watchers.contains(&user)
    }
}
