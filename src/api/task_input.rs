//! Task write payload
//!
//! The inbound side of the full task representation. Server-managed fields
//! (`id`, `ref`, `created_date`, `modified_date`, `owner`) are not part of
//! the payload and are ignored when a client echoes them back.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::models::{
    HexColor, MilestoneId, ProjectId, StatusId, TagWithColor, Task, UserId, UserStoryId,
};

use super::context::Context;
use super::error::{ApiError, ValidationErrors};
use super::fields::{optional_text, required, required_text};
use super::tags::INVALID_COLOR;

/// Message when a watcher is not a project member
pub const INVALID_WATCHERS: &str = "Watchers contains invalid users";

/// Message when a referenced project does not exist
pub const NO_PROJECT: &str = "There's no project with that id";

/// Message when a referenced sprint does not exist
pub const NO_SPRINT: &str = "There's no sprint with that id";

/// Message when a referenced status does not exist
pub const NO_STATUS: &str = "There's no status with that id";

/// Message when a referenced user story does not exist
pub const NO_USER_STORY: &str = "There's no user story with that id";

/// Message when a referenced task does not exist
pub const NO_TASK: &str = "There's no task with that id";

/// Message when an assignee is not a project member
pub const INVALID_ASSIGNEE: &str = "The user must be a project member.";

/// A tag as sent by clients: a bare name or a `[name, color]` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    /// `"backend"`
    Name(String),
    /// `["backend", "#f00"]` or `["backend", null]`
    Pair(String, Option<String>),
}

impl TagInput {
    fn parts(&self) -> (&str, Option<&str>) {
        match self {
            Self::Name(name) => (name.trim(), None),
            Self::Pair(name, color) => (name.trim(), color.as_deref()),
        }
    }
}

/// Task create/update payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    /// Owning project (required on create)
    #[serde(default)]
    pub project: Option<ProjectId>,
    /// Subject line (required on create)
    #[serde(default)]
    pub subject: Option<String>,
    /// Markdown description
    #[serde(default)]
    pub description: Option<String>,
    /// Sprint
    #[serde(default)]
    pub milestone: Option<MilestoneId>,
    /// Status
    #[serde(default)]
    pub status: Option<StatusId>,
    /// Parent user story
    #[serde(default)]
    pub user_story: Option<UserStoryId>,
    /// Assignee
    #[serde(default)]
    pub assigned_to: Option<UserId>,
    /// Position inside the user story
    #[serde(default)]
    pub us_order: Option<i64>,
    /// Position on the taskboard
    #[serde(default)]
    pub taskboard_order: Option<i64>,
    /// Needs-attention flag
    #[serde(default)]
    pub is_iocaine: Option<bool>,
    /// Blocked flag
    #[serde(default)]
    pub is_blocked: Option<bool>,
    /// Block explanation
    #[serde(default)]
    pub blocked_note: Option<String>,
    /// External system reference
    #[serde(default)]
    pub external_reference: Option<Vec<String>>,
    /// Watchers
    #[serde(default)]
    pub watchers: Option<Vec<UserId>>,
    /// Tags
    #[serde(default)]
    pub tags: Option<Vec<TagInput>>,
}

/// A validated task payload, ready to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Owning project
    pub project: ProjectId,
    /// Subject line
    pub subject: Option<String>,
    /// Normalized tags
    pub tags: Option<Vec<TagWithColor>>,
    input: TaskInput,
}

impl TaskInput {
    /// Validate a creation payload; `project` and `subject` are required
    pub fn validate_create(&self, ctx: &Context<'_>) -> Result<TaskChanges, ApiError> {
        let mut errors = ValidationErrors::new();
        let project = required(&mut errors, "project", self.project);
        let subject = required_text(&mut errors, "subject", self.subject.as_deref());
        if let Some(id) = project
            && !ctx.catalog.project_exists(id)?
        {
            errors.add("project", NO_PROJECT);
        }
        let tags = self.check_common(&mut errors, project, ctx)?;
        errors.into_result()?;

        let project =
            project.ok_or_else(|| ApiError::internal("project missing after validation"))?;
        Ok(TaskChanges {
            project,
            subject,
            tags,
            input: self.clone(),
        })
    }

    /// Validate an update of `task`; absent fields are left unchanged
    pub fn validate_update(
        &self,
        task: &Task,
        ctx: &Context<'_>,
    ) -> Result<TaskChanges, ApiError> {
        let mut errors = ValidationErrors::new();
        if self.project.is_some_and(|p| p != task.project.id) {
            errors.add("project", "A task cannot be moved to another project.");
        }
        let subject = optional_text(&mut errors, "subject", self.subject.as_deref());
        let tags = self.check_common(&mut errors, Some(task.project.id), ctx)?;
        errors.into_result()?;

        Ok(TaskChanges {
            project: task.project.id,
            subject,
            tags,
            input: self.clone(),
        })
    }

    fn check_common(
        &self,
        errors: &mut ValidationErrors,
        project: Option<ProjectId>,
        ctx: &Context<'_>,
    ) -> Result<Option<Vec<TagWithColor>>, ApiError> {
        if let Some(id) = self.milestone
            && !ctx.catalog.milestone_exists(id)?
        {
            errors.add("milestone", NO_SPRINT);
        }
        if let Some(id) = self.status
            && !ctx.catalog.status_exists(id)?
        {
            errors.add("status", NO_STATUS);
        }
        if let Some(id) = self.user_story
            && !ctx.catalog.user_story_exists(id)?
        {
            errors.add("user_story", NO_USER_STORY);
        }

        if let Some(project) = project {
            if let Some(user) = self.assigned_to
                && !ctx.catalog.is_member(project, user)?
            {
                errors.add("assigned_to", INVALID_ASSIGNEE);
            }
            if let Some(watchers) = &self.watchers {
                for &user in watchers {
                    if !ctx.catalog.is_member(project, user)? {
                        debug!("watcher {user} is not a member of project {project}");
                        errors.add("watchers", INVALID_WATCHERS);
                        break;
                    }
                }
            }
        }

        Ok(self.tags.as_deref().map(|tags| normalize_tags(errors, tags)))
    }
}

/// Turn client tag inputs into tag/color pairs, recording malformed entries
///
/// Duplicates collapse into one entry; the last color given for a tag wins.
fn normalize_tags(errors: &mut ValidationErrors, tags: &[TagInput]) -> Vec<TagWithColor> {
    let mut out: Vec<TagWithColor> = Vec::with_capacity(tags.len());
    for input in tags {
        let (name, color) = input.parts();
        if name.is_empty() {
            errors.add("tags", "Tags may not be blank.");
            continue;
        }
        let color = match color.map(HexColor::parse).transpose() {
            Ok(c) => c,
            Err(_) => {
                errors.add("tags", INVALID_COLOR);
                continue;
            },
        };
        // a repeated tag keeps its first position and takes the last color
        if let Some(existing) = out.iter_mut().find(|t| t.tag() == name) {
            existing.1 = color;
            continue;
        }
        out.push(TagWithColor(name.to_string(), color));
    }
    out
}

impl TaskChanges {
    /// Apply the payload's plain fields to `task`
    ///
    /// Relations (milestone, status, assignee, user story) are applied by the
    /// persistence layer, which resolves IDs to records; they are available
    /// through [`TaskChanges::input`].
    pub fn apply(&self, task: &mut Task) {
        let input = &self.input;
        if let Some(subject) = &self.subject {
            task.subject.clone_from(subject);
        }
        if let Some(description) = &input.description {
            task.description.clone_from(description);
        }
        if let Some(v) = input.us_order {
            task.us_order = v;
        }
        if let Some(v) = input.taskboard_order {
            task.taskboard_order = v;
        }
        if let Some(v) = input.is_iocaine {
            task.is_iocaine = v;
        }
        if let Some(v) = input.is_blocked {
            task.is_blocked = v;
        }
        if let Some(note) = &input.blocked_note {
            task.blocked_note.clone_from(note);
        }
        if input.external_reference.is_some() {
            task.external_reference.clone_from(&input.external_reference);
        }
        if let Some(watchers) = &input.watchers {
            task.watchers.clone_from(watchers);
        }
        if let Some(tags) = &self.tags {
            task.tags.clone_from(tags);
        }
    }

    /// The validated payload
    #[must_use]
    pub const fn input(&self) -> &TaskInput {
        &self.input
    }
}
