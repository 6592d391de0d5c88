//! Project-level records a task refers to

use serde::{Deserialize, Serialize};

use super::{MilestoneId, ProjectId, StatusId, UserId, UserStoryId};

/// A project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// URL slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Users that belong to the project
    #[serde(default)]
    pub members: Vec<UserId>,
}

impl Project {
    /// Lightweight reference used for project-scoped rendering
    #[must_use]
    pub fn to_ref(&self) -> ProjectRef {
        ProjectRef {
            id: self.id,
            slug: self.slug.clone(),
        }
    }
}

/// Identifier plus slug of a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Project ID
    pub id: ProjectId,
    /// Project slug
    pub slug: String,
}

/// A time-boxed iteration (sprint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Unique identifier
    pub id: MilestoneId,
    /// Owning project
    pub project: ProjectId,
    /// URL slug (e.g. "sprint-1")
    pub slug: String,
    /// Display name
    pub name: String,
}

/// A task status as configured per project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Unique identifier
    pub id: StatusId,
    /// Owning project
    pub project: ProjectId,
    /// Display name
    pub name: String,
    /// Display color
    #[serde(default)]
    pub color: Option<String>,
    /// Whether tasks in this status count as closed
    #[serde(default)]
    pub is_closed: bool,
}

/// A user story that groups tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStory {
    /// Unique identifier
    pub id: UserStoryId,
    /// Owning project
    pub project: ProjectId,
    /// Project-local reference number
    #[serde(rename = "ref")]
    pub reference: u64,
    /// Subject line
    pub subject: String,
}
