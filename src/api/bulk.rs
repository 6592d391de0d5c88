//! Bulk task request validators
//!
//! A bulk request is all or nothing: one bad reference rejects the whole
//! batch before any service is called.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::models::{MilestoneId, ProjectId, StatusId, TaskId, UserStoryId};
use crate::core::services::split_bulk_subjects;

use super::context::Context;
use super::error::{ApiError, ValidationErrors};
use super::fields::{required, required_list, required_text};
use super::task_input::{NO_PROJECT, NO_SPRINT, NO_STATUS, NO_TASK, NO_USER_STORY};

fn check_project(
    errors: &mut ValidationErrors,
    ctx: &Context<'_>,
    id: Option<ProjectId>,
) -> Result<(), ApiError> {
    if let Some(id) = required(errors, "project_id", id)
        && !ctx.catalog.project_exists(id)?
    {
        errors.add("project_id", NO_PROJECT);
    }
    Ok(())
}

// =============================================================================
// BULK CREATE
// =============================================================================

/// Request body for creating many tasks from a text block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksBulkRequest {
    /// Target project
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Target sprint
    #[serde(default)]
    pub sprint_id: Option<MilestoneId>,
    /// Initial status
    #[serde(default)]
    pub status_id: Option<StatusId>,
    /// Parent user story
    #[serde(default)]
    pub us_id: Option<UserStoryId>,
    /// One task subject per line
    #[serde(default)]
    pub bulk_tasks: Option<String>,
}

/// A validated bulk creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TasksBulk {
    /// Target project
    pub project_id: ProjectId,
    /// Target sprint
    pub sprint_id: MilestoneId,
    /// Initial status
    pub status_id: Option<StatusId>,
    /// Parent user story
    pub us_id: Option<UserStoryId>,
    /// Subjects of the tasks to create
    pub subjects: Vec<String>,
}

impl TasksBulkRequest {
    /// Validate references and split the text block into subjects
    pub fn validate(&self, ctx: &Context<'_>) -> Result<TasksBulk, ApiError> {
        let mut errors = ValidationErrors::new();

        check_project(&mut errors, ctx, self.project_id)?;
        if let Some(id) = required(&mut errors, "sprint_id", self.sprint_id)
            && !ctx.catalog.milestone_exists(id)?
        {
            errors.add("sprint_id", NO_SPRINT);
        }
        if let Some(id) = self.status_id
            && !ctx.catalog.status_exists(id)?
        {
            errors.add("status_id", NO_STATUS);
        }
        if let Some(id) = self.us_id
            && !ctx.catalog.user_story_exists(id)?
        {
            errors.add("us_id", NO_USER_STORY);
        }
        let text = required_text(&mut errors, "bulk_tasks", self.bulk_tasks.as_deref());

        errors.into_result()?;
        let (Some(project_id), Some(sprint_id), Some(text)) = (self.project_id, self.sprint_id, text)
        else {
            return Err(ApiError::internal("bulk request incomplete after validation"));
        };
        let subjects = split_bulk_subjects(&text);
        debug!("bulk create of {} task(s) in project {project_id} is valid", subjects.len());
        Ok(TasksBulk {
            project_id,
            sprint_id,
            status_id: self.status_id,
            us_id: self.us_id,
            subjects,
        })
    }
}

// =============================================================================
// BULK REORDER
// =============================================================================

/// One `(task, order)` entry of a reorder request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TaskOrderEntry {
    /// Task to move
    #[serde(default)]
    pub task_id: Option<TaskId>,
    /// Target order
    #[serde(default)]
    pub order: Option<i64>,
}

/// Request body for reordering many tasks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTasksOrderBulkRequest {
    /// Project the tasks belong to
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Ordered `(task, order)` entries
    #[serde(default)]
    pub bulk_tasks: Option<Vec<TaskOrderEntry>>,
}

/// A validated `(task, order)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskOrder {
    /// Task to move
    pub task_id: TaskId,
    /// Target order
    pub order: i64,
}

/// A validated bulk reorder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TasksOrderBulk {
    /// Project the tasks belong to
    pub project_id: ProjectId,
    /// Entries in request order
    pub orders: Vec<TaskOrder>,
}

impl UpdateTasksOrderBulkRequest {
    /// Validate the project and every task reference
    pub fn validate(&self, ctx: &Context<'_>) -> Result<TasksOrderBulk, ApiError> {
        let mut errors = ValidationErrors::new();

        check_project(&mut errors, ctx, self.project_id)?;

        let mut orders = Vec::new();
        if let Some(entries) = required_list(&mut errors, "bulk_tasks", self.bulk_tasks.as_deref())
        {
            for (i, entry) in entries.iter().enumerate() {
                let task_field = format!("bulk_tasks[{i}].task_id");
                let order_field = format!("bulk_tasks[{i}].order");
                let task_id = required(&mut errors, &task_field, entry.task_id);
                let order = required(&mut errors, &order_field, entry.order);
                if let Some(id) = task_id
                    && !ctx.catalog.task_exists(id)?
                {
                    debug!("reorder references unknown task {id}");
                    errors.add(task_field, NO_TASK);
                }
                if let (Some(task_id), Some(order)) = (task_id, order) {
                    orders.push(TaskOrder { task_id, order });
                }
            }
        }

        errors.into_result()?;
        let project_id = self
            .project_id
            .ok_or_else(|| ApiError::internal("project_id missing after validation"))?;
        Ok(TasksOrderBulk { project_id, orders })
    }
}
