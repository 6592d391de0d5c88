//! Dataset files
//!
//! Loads a [`MemoryStore`] from a TOML dataset describing projects and the
//! records inside them. Task relations are given by ID and resolved on load.
//!
//! ```toml
//! [[project]]
//! id = 1
//! slug = "demo"
//! name = "Demo"
//! members = [1]
//!
//! [[user]]
//! id = 1
//! username = "ada"
//!
//! [[task]]
//! id = 10
//! ref = 1
//! project = 1
//! subject = "Write docs"
//! created_date = "2024-05-01T09:00:00Z"
//! tags = ["docs", ["urgent", "#f00"]]
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{
    HexColor, Milestone, MilestoneId, Project, ProjectId, Status, StatusId, TagWithColor, Task,
    TaskId, User, UserId, UserStory, UserStoryId,
};

use super::memory::MemoryStore;

/// Errors that can occur when loading a dataset
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The file could not be read
    #[error("cannot read dataset {path}: {source}")]
    Io {
        /// Dataset path
        path: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for a dataset
    #[error("invalid dataset: {0}")]
    Parse(#[from] toml::de::Error),

    /// A record points at a record that is not in the dataset
    #[error("{record} refers to unknown {kind} {id}")]
    UnknownReference {
        /// Record holding the reference
        record: String,
        /// Kind of the missing record
        kind: &'static str,
        /// Missing ID
        id: u64,
    },

    /// A tag color is not a hex color
    #[error("task {task}: {source}")]
    Color {
        /// Task carrying the tag
        task: TaskId,
        /// Underlying error
        source: crate::core::models::InvalidColor,
    },
}

/// A dataset file
#[derive(Debug, Default, Deserialize)]
struct Dataset {
    #[serde(default, rename = "project")]
    projects: Vec<ProjectEntry>,
    #[serde(default, rename = "user")]
    users: Vec<User>,
    #[serde(default, rename = "milestone")]
    milestones: Vec<Milestone>,
    #[serde(default, rename = "status")]
    statuses: Vec<Status>,
    #[serde(default, rename = "user_story")]
    user_stories: Vec<UserStoryEntry>,
    #[serde(default, rename = "task")]
    tasks: Vec<TaskEntry>,
    #[serde(default, rename = "vote")]
    votes: Vec<VoteEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    #[serde(flatten)]
    project: Project,
    /// Tags used by items that are not modelled here (e.g. issues)
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UserStoryEntry {
    #[serde(flatten)]
    story: UserStory,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagEntry {
    Name(String),
    Pair(String, String),
}

#[derive(Debug, Deserialize)]
struct TaskEntry {
    id: TaskId,
    #[serde(rename = "ref")]
    reference: u64,
    project: ProjectId,
    #[serde(default)]
    milestone: Option<MilestoneId>,
    #[serde(default)]
    user_story: Option<UserStoryId>,
    #[serde(default)]
    status: Option<StatusId>,
    #[serde(default)]
    assigned_to: Option<UserId>,
    #[serde(default)]
    owner: Option<UserId>,
    #[serde(default)]
    created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    finished_date: Option<DateTime<Utc>>,
    subject: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    us_order: i64,
    #[serde(default)]
    taskboard_order: i64,
    #[serde(default)]
    is_iocaine: bool,
    #[serde(default)]
    external_reference: Option<Vec<String>>,
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    watchers: Vec<UserId>,
    #[serde(default)]
    is_blocked: bool,
    #[serde(default)]
    blocked_note: String,
    #[serde(default)]
    tags: Vec<TagEntry>,
}

const fn default_version() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct VoteEntry {
    task: TaskId,
    user: UserId,
}

fn unknown(record: String, kind: &'static str, id: u64) -> FixtureError {
    FixtureError::UnknownReference { record, kind, id }
}

/// Load a dataset file into a store
pub fn load_dataset(path: &Path) -> Result<MemoryStore, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let store = parse_dataset(&content)?;
    debug!("loaded dataset {}", path.display());
    Ok(store)
}

/// Parse dataset TOML into a store
pub fn parse_dataset(content: &str) -> Result<MemoryStore, FixtureError> {
    let dataset: Dataset = toml::from_str(content)?;
    let mut store = MemoryStore::new();

    for entry in dataset.projects {
        let id = entry.project.id;
        store.insert_project(entry.project);
        store.add_item_tags(id, entry.tags);
    }
    for user in dataset.users {
        store.insert_user(user);
    }
    for milestone in dataset.milestones {
        if store.project(milestone.project).is_none() {
            return Err(unknown(format!("milestone {}", milestone.id), "project", milestone.project));
        }
        store.insert_milestone(milestone);
    }
    for status in dataset.statuses {
        if store.project(status.project).is_none() {
            return Err(unknown(format!("status {}", status.id), "project", status.project));
        }
        store.insert_status(status);
    }
    for entry in dataset.user_stories {
        let project = entry.story.project;
        if store.project(project).is_none() {
            return Err(unknown(format!("user story {}", entry.story.id), "project", project));
        }
        store.insert_user_story(entry.story);
        store.add_item_tags(project, entry.tags);
    }
    for entry in dataset.tasks {
        let task = build_task(&store, entry)?;
        store.insert_task(task);
    }
    for vote in dataset.votes {
        if store.task(vote.task).is_none() {
            return Err(unknown("vote".to_string(), "task", vote.task));
        }
        store.add_vote(vote.task, vote.user);
    }

    Ok(store)
}

fn build_task(store: &MemoryStore, entry: TaskEntry) -> Result<Task, FixtureError> {
    let record = format!("task {}", entry.id);
    let project = store
        .project(entry.project)
        .ok_or_else(|| unknown(record.clone(), "project", entry.project))?
        .to_ref();

    let milestone = entry
        .milestone
        .map(|id| store.milestone(id).cloned().ok_or_else(|| unknown(record.clone(), "milestone", id)))
        .transpose()?;
    let status = entry
        .status
        .map(|id| store.status(id).cloned().ok_or_else(|| unknown(record.clone(), "status", id)))
        .transpose()?;
    let assigned_to = entry
        .assigned_to
        .map(|id| store.user(id).cloned().ok_or_else(|| unknown(record.clone(), "user", id)))
        .transpose()?;
    let owner = entry
        .owner
        .map(|id| store.user(id).cloned().ok_or_else(|| unknown(record.clone(), "user", id)))
        .transpose()?;

    let tags = entry
        .tags
        .into_iter()
        .map(|tag| match tag {
            TagEntry::Name(name) => Ok(TagWithColor::plain(name)),
            TagEntry::Pair(name, color) => HexColor::parse(&color)
                .map(|c| TagWithColor::colored(name, c))
                .map_err(|source| FixtureError::Color {
                    task: entry.id,
                    source,
                }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut task = Task::new(entry.id, entry.reference, project, entry.subject);
    if let Some(created) = entry.created_date {
        task.created_date = created;
        task.modified_date = created;
    }
    if let Some(modified) = entry.modified_date {
        task.modified_date = modified;
    }
    task.milestone = milestone;
    task.user_story = entry.user_story;
    task.status = status;
    task.assigned_to = assigned_to;
    task.owner = owner;
    task.finished_date = entry.finished_date;
    task.description = entry.description;
    task.us_order = entry.us_order;
    task.taskboard_order = entry.taskboard_order;
    task.is_iocaine = entry.is_iocaine;
    task.external_reference = entry.external_reference;
    task.version = entry.version;
    task.watchers = entry.watchers;
    task.is_blocked = entry.is_blocked;
    task.blocked_note = entry.blocked_note;
    task.tags = tags;
    Ok(task)
}
