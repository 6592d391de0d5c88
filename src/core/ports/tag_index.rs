//! Tag index port
//!
//! Answers whether a tag is in use anywhere inside a project.

use crate::core::models::ProjectId;

/// Aggregated tag set of a project
///
/// A tag "exists" for a project when any taggable item of that project
/// (task, user story, issue) carries it.
pub trait TagIndex: Send + Sync {
    /// Whether `tag` is used by any taggable item in `project`
    fn tag_exists(&self, project: ProjectId, tag: &str) -> anyhow::Result<bool>;
}
