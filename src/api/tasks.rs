//! Task representations
//!
//! Three outgoing shapes share the same derived-field rules
//! ([`Task::is_closed`], [`Task::milestone_slug`]):
//!
//! - [`TaskDetail`] - everything, including rendered markdown
//! - [`TaskListItem`] - an enumerated subset for board and list views, no rendering
//! - [`TaskNeighbors`] - a detail plus prev/next stubs for navigation

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::{
    MilestoneId, ProjectId, StatusId, TagWithColor, Task, TaskId, UserId, UserStoryId,
};

use super::context::Context;
use super::error::ApiError;
use super::summary::{StatusInfo, UserInfo};

/// Watch and vote metadata relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Engagement {
    /// Whether the viewer watches the task
    pub is_watcher: bool,
    /// Number of watchers
    pub total_watchers: usize,
    /// Whether the viewer voted for the task
    pub is_voter: bool,
    /// Number of voters
    pub total_voters: u64,
}

impl Engagement {
    /// Compute engagement for `task` as seen by the context viewer
    pub fn for_task(task: &Task, ctx: &Context<'_>) -> Result<Self, ApiError> {
        let is_voter = match ctx.viewer {
            Some(user) => ctx.votes.is_voter(task.id, user)?,
            None => false,
        };
        Ok(Self {
            is_watcher: ctx.viewer.is_some_and(|u| task.is_watched_by(u)),
            total_watchers: task.watchers.len(),
            is_voter,
            total_voters: ctx.votes.total_voters(task.id)?,
        })
    }
}

// =============================================================================
// FULL
// =============================================================================

/// Full task representation
#[derive(Debug, Clone, Serialize)]
pub struct TaskDetail {
    /// Task ID
    pub id: TaskId,
    /// Project-local reference number
    #[serde(rename = "ref")]
    pub reference: u64,
    /// Project ID
    pub project: ProjectId,
    /// Milestone ID
    pub milestone: Option<MilestoneId>,
    /// Milestone slug
    pub milestone_slug: Option<String>,
    /// Parent user story ID
    pub user_story: Option<UserStoryId>,
    /// Status ID
    pub status: Option<StatusId>,
    /// Status summary
    pub status_extra_info: Option<StatusInfo>,
    /// Assignee ID
    pub assigned_to: Option<UserId>,
    /// Assignee summary
    pub assigned_to_extra_info: Option<UserInfo>,
    /// Owner ID
    pub owner: Option<UserId>,
    /// Owner summary
    pub owner_extra_info: Option<UserInfo>,
    /// Creation timestamp
    pub created_date: DateTime<Utc>,
    /// Last modification timestamp
    pub modified_date: DateTime<Utc>,
    /// Close timestamp
    pub finished_date: Option<DateTime<Utc>>,
    /// Subject line
    pub subject: String,
    /// Markdown description
    pub description: String,
    /// Rendered description
    pub description_html: String,
    /// Position inside the user story
    pub us_order: i64,
    /// Position on the taskboard
    pub taskboard_order: i64,
    /// Needs-attention flag
    pub is_iocaine: bool,
    /// External system reference
    pub external_reference: Option<Vec<String>>,
    /// Optimistic-locking version
    pub version: u32,
    /// Watcher IDs
    pub watchers: Vec<UserId>,
    /// Watch and vote metadata
    #[serde(flatten)]
    pub engagement: Engagement,
    /// Blocked flag
    pub is_blocked: bool,
    /// Markdown block explanation
    pub blocked_note: String,
    /// Rendered block explanation
    pub blocked_note_html: String,
    /// Whether the status is a closed one
    pub is_closed: bool,
    /// Tags with colors
    pub tags: Vec<TagWithColor>,
    /// Always empty
    pub comment: String,
}

impl TaskDetail {
    /// Build the full representation of `task`
    pub fn from_task(task: &Task, ctx: &Context<'_>) -> Result<Self, ApiError> {
        Ok(Self {
            id: task.id,
            reference: task.reference,
            project: task.project.id,
            milestone: task.milestone.as_ref().map(|m| m.id),
            milestone_slug: task.milestone_slug().map(ToString::to_string),
            user_story: task.user_story,
            status: task.status.as_ref().map(|s| s.id),
            status_extra_info: task.status.as_ref().map(StatusInfo::from),
            assigned_to: task.assigned_to.as_ref().map(|u| u.id),
            assigned_to_extra_info: task.assigned_to.as_ref().map(UserInfo::from),
            owner: task.owner.as_ref().map(|u| u.id),
            owner_extra_info: task.owner.as_ref().map(UserInfo::from),
            created_date: task.created_date,
            modified_date: task.modified_date,
            finished_date: task.finished_date,
            subject: task.subject.clone(),
            description: task.description.clone(),
            description_html: ctx.markdown.render(&task.project, &task.description),
            us_order: task.us_order,
            taskboard_order: task.taskboard_order,
            is_iocaine: task.is_iocaine,
            external_reference: task.external_reference.clone(),
            version: task.version,
            watchers: task.watchers.clone(),
            engagement: Engagement::for_task(task, ctx)?,
            is_blocked: task.is_blocked,
            blocked_note: task.blocked_note.clone(),
            blocked_note_html: ctx.markdown.render(&task.project, &task.blocked_note),
            is_closed: task.is_closed(),
            tags: task.tags.clone(),
            comment: String::new(),
        })
    }
}

// =============================================================================
// LIST
// =============================================================================

/// Lightweight task representation for lists
#[derive(Debug, Clone, Serialize)]
pub struct TaskListItem {
    /// Task ID
    pub id: TaskId,
    /// Parent user story ID
    pub user_story: Option<UserStoryId>,
    /// Project-local reference number
    #[serde(rename = "ref")]
    pub reference: u64,
    /// Project ID
    pub project: ProjectId,
    /// Milestone ID
    pub milestone: Option<MilestoneId>,
    /// Milestone slug
    pub milestone_slug: Option<String>,
    /// Creation timestamp
    pub created_date: DateTime<Utc>,
    /// Last modification timestamp
    pub modified_date: DateTime<Utc>,
    /// Close timestamp
    pub finished_date: Option<DateTime<Utc>>,
    /// Subject line
    pub subject: String,
    /// Position inside the user story
    pub us_order: i64,
    /// Position on the taskboard
    pub taskboard_order: i64,
    /// Needs-attention flag
    pub is_iocaine: bool,
    /// External system reference
    pub external_reference: Option<Vec<String>>,
    /// Optimistic-locking version
    pub version: u32,
    /// Watcher IDs
    pub watchers: Vec<UserId>,
    /// Blocked flag
    pub is_blocked: bool,
    /// Markdown block explanation
    pub blocked_note: String,
    /// Tags with colors
    pub tags: Vec<TagWithColor>,
    /// Whether the status is a closed one
    pub is_closed: bool,
    /// Status ID
    pub status: Option<StatusId>,
    /// Status summary
    pub status_extra_info: Option<StatusInfo>,
    /// Assignee ID
    pub assigned_to: Option<UserId>,
    /// Assignee summary
    pub assigned_to_extra_info: Option<UserInfo>,
    /// Owner ID
    pub owner: Option<UserId>,
    /// Owner summary
    pub owner_extra_info: Option<UserInfo>,
    /// Watch and vote metadata
    #[serde(flatten)]
    pub engagement: Engagement,
}

impl TaskListItem {
    /// Build the list representation of `task`
    pub fn from_task(task: &Task, ctx: &Context<'_>) -> Result<Self, ApiError> {
        Ok(Self {
            id: task.id,
            user_story: task.user_story,
            reference: task.reference,
            project: task.project.id,
            milestone: task.milestone.as_ref().map(|m| m.id),
            milestone_slug: task.milestone_slug().map(ToString::to_string),
            created_date: task.created_date,
            modified_date: task.modified_date,
            finished_date: task.finished_date,
            subject: task.subject.clone(),
            us_order: task.us_order,
            taskboard_order: task.taskboard_order,
            is_iocaine: task.is_iocaine,
            external_reference: task.external_reference.clone(),
            version: task.version,
            watchers: task.watchers.clone(),
            is_blocked: task.is_blocked,
            blocked_note: task.blocked_note.clone(),
            tags: task.tags.clone(),
            is_closed: task.is_closed(),
            status: task.status.as_ref().map(|s| s.id),
            status_extra_info: task.status.as_ref().map(StatusInfo::from),
            assigned_to: task.assigned_to.as_ref().map(|u| u.id),
            assigned_to_extra_info: task.assigned_to.as_ref().map(UserInfo::from),
            owner: task.owner.as_ref().map(|u| u.id),
            owner_extra_info: task.owner.as_ref().map(UserInfo::from),
            engagement: Engagement::for_task(task, ctx)?,
        })
    }

    /// Build list representations for many tasks, failing on the first lookup error
    pub fn from_tasks(tasks: &[Task], ctx: &Context<'_>) -> Result<Vec<Self>, ApiError> {
        tasks.iter().map(|t| Self::from_task(t, ctx)).collect()
    }
}

// =============================================================================
// NEIGHBORS
// =============================================================================

/// Minimal stub of a neighboring task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborStub {
    /// Task ID
    pub id: TaskId,
    /// Project-local reference number
    #[serde(rename = "ref")]
    pub reference: u64,
    /// Subject line
    pub subject: String,
}

impl From<&Task> for NeighborStub {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            reference: task.reference,
            subject: task.subject.clone(),
        }
    }
}

/// Previous and next stubs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NeighborsData {
    /// Previous task
    pub previous: Option<NeighborStub>,
    /// Next task
    pub next: Option<NeighborStub>,
}

/// Full representation plus navigation neighbors
#[derive(Debug, Clone, Serialize)]
pub struct TaskNeighbors {
    /// The task itself
    #[serde(flatten)]
    pub task: TaskDetail,
    /// Its neighbors
    pub neighbors: NeighborsData,
}

impl TaskNeighbors {
    /// Build the representation of `task` with its resolved neighbors
    pub fn from_task(task: &Task, ctx: &Context<'_>) -> Result<Self, ApiError> {
        let resolved = ctx.neighbors.neighbors(task)?;
        Ok(Self {
            task: TaskDetail::from_task(task, ctx)?,
            neighbors: NeighborsData {
                previous: resolved.previous.as_ref().map(NeighborStub::from),
                next: resolved.next.as_ref().map(NeighborStub::from),
            },
        })
    }
}
