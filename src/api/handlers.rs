//! Pure API handlers
//!
//! These handlers take a raw JSON body, parse it into the matching request
//! type, and run its validator. They are HTTP-agnostic and return
//! `Result<serde_json::Value, ApiError>` with the validated command.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::{ProjectId, Task};

use super::bulk::{TasksBulkRequest, UpdateTasksOrderBulkRequest};
use super::context::{Context, TagScope};
use super::error::ApiError;
use super::tags::{CreateTagRequest, DeleteTagRequest, EditTagRequest, MixTagsRequest};
use super::task_input::TaskInput;
use super::tasks::{TaskDetail, TaskListItem, TaskNeighbors};

/// Kinds of request body the handlers understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Create a tag
    CreateTag,
    /// Rename or recolor a tag
    EditTag,
    /// Delete a tag
    DeleteTag,
    /// Merge tags into one
    MixTags,
    /// Create a task
    CreateTask,
    /// Create tasks from a text block
    BulkCreate,
    /// Reorder tasks
    BulkOrder,
}

impl RequestKind {
    /// Whether this kind is validated against a project's tag set
    #[must_use]
    pub const fn is_tag_request(self) -> bool {
        match self {
            Self::CreateTag | Self::EditTag | Self::DeleteTag | Self::MixTags => true,
            Self::CreateTask | Self::BulkCreate | Self::BulkOrder => false,
        }
    }
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateTag => write!(f, "create-tag"),
            Self::EditTag => write!(f, "edit-tag"),
            Self::DeleteTag => write!(f, "delete-tag"),
            Self::MixTags => write!(f, "mix-tags"),
            Self::CreateTask => write!(f, "create-task"),
            Self::BulkCreate => write!(f, "bulk-create"),
            Self::BulkOrder => write!(f, "bulk-order"),
        }
    }
}

impl std::str::FromStr for RequestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "create-tag" => Ok(Self::CreateTag),
            "edit-tag" | "rename-tag" => Ok(Self::EditTag),
            "delete-tag" => Ok(Self::DeleteTag),
            "mix-tags" => Ok(Self::MixTags),
            "create-task" => Ok(Self::CreateTask),
            "bulk-create" => Ok(Self::BulkCreate),
            "bulk-order" => Ok(Self::BulkOrder),
            _ => Err(format!(
                "Invalid request kind: {s}. Use: create-tag, edit-tag, delete-tag, mix-tags, \
                 create-task, bulk-create, bulk-order"
            )),
        }
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(body)?)
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

/// Bind a tag request to its project, which must exist
fn tag_scope<'c>(
    project: Option<ProjectId>,
    ctx: &'c Context<'_>,
) -> Result<TagScope<'c>, ApiError> {
    let project = project.ok_or_else(|| ApiError::bad_request("Tag requests need a project"))?;
    if !ctx.catalog.project_exists(project)? {
        return Err(ApiError::not_found(format!("Project '{project}' not found")));
    }
    Ok(ctx.tag_scope(project))
}

/// Parse and validate a request body
///
/// Tag requests need the project they are bound to; a missing project is a
/// bad request for those kinds and ignored for the others.
pub fn validate_request(
    kind: RequestKind,
    body: &str,
    project: Option<ProjectId>,
    ctx: &Context<'_>,
) -> Result<serde_json::Value, ApiError> {
    match kind {
        RequestKind::CreateTag => {
            let scope = tag_scope(project, ctx)?;
            to_value(&parse::<CreateTagRequest>(body)?.validate(&scope)?)
        },
        RequestKind::EditTag => {
            let scope = tag_scope(project, ctx)?;
            to_value(&parse::<EditTagRequest>(body)?.validate(&scope)?)
        },
        RequestKind::DeleteTag => {
            let scope = tag_scope(project, ctx)?;
            to_value(&parse::<DeleteTagRequest>(body)?.validate(&scope)?)
        },
        RequestKind::MixTags => {
            let scope = tag_scope(project, ctx)?;
            to_value(&parse::<MixTagsRequest>(body)?.validate(&scope)?)
        },
        RequestKind::CreateTask => {
            let changes = parse::<TaskInput>(body)?.validate_create(ctx)?;
            Ok(serde_json::json!({
                "project": changes.project,
                "subject": changes.subject,
                "tags": changes.tags,
            }))
        },
        RequestKind::BulkCreate => to_value(&parse::<TasksBulkRequest>(body)?.validate(ctx)?),
        RequestKind::BulkOrder => {
            to_value(&parse::<UpdateTasksOrderBulkRequest>(body)?.validate(ctx)?)
        },
    }
}

/// How a task should be represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskView {
    /// Full representation
    #[default]
    Detail,
    /// Lightweight list item
    List,
    /// Full representation with prev/next neighbors
    Neighbors,
}

/// Represent a task in the requested view
pub fn represent_task(
    task: &Task,
    view: TaskView,
    ctx: &Context<'_>,
) -> Result<serde_json::Value, ApiError> {
    match view {
        TaskView::Detail => to_value(&TaskDetail::from_task(task, ctx)?),
        TaskView::List => to_value(&TaskListItem::from_task(task, ctx)?),
        TaskView::Neighbors => to_value(&TaskNeighbors::from_task(task, ctx)?),
    }
}
