//! Request context
//!
//! Bundles the ports a request is validated and represented against, plus
//! the user the response is rendered for.

use crate::core::models::{ProjectId, UserId};
use crate::core::ports::{Catalog, MarkdownRenderer, NeighborResolver, TagIndex, VoteLedger};

use super::error::ApiError;

/// Ports and viewer for one request
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Existence and membership lookups
    pub catalog: &'a dyn Catalog,
    /// Project tag index
    pub tags: &'a dyn TagIndex,
    /// Markdown renderer
    pub markdown: &'a dyn MarkdownRenderer,
    /// Prev/next resolution
    pub neighbors: &'a dyn NeighborResolver,
    /// Vote counts
    pub votes: &'a dyn VoteLedger,
    /// User the representation is rendered for (None = anonymous)
    pub viewer: Option<UserId>,
}

impl Context<'_> {
    /// Bind the tag index to one project
    #[must_use]
    pub fn tag_scope(&self, project: ProjectId) -> TagScope<'_> {
        TagScope::new(project, self.tags)
    }

    /// Same context rendered for another viewer
    #[must_use]
    pub const fn with_viewer(mut self, viewer: Option<UserId>) -> Self {
        self.viewer = viewer;
        self
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("viewer", &self.viewer).finish_non_exhaustive()
    }
}

/// The tag index bound to a single project
#[derive(Clone, Copy)]
pub struct TagScope<'a> {
    project: ProjectId,
    index: &'a dyn TagIndex,
}

impl<'a> TagScope<'a> {
    /// Bind `index` to `project`
    #[must_use]
    pub const fn new(project: ProjectId, index: &'a dyn TagIndex) -> Self {
        Self { project, index }
    }

    /// The bound project
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Whether `tag` is used in the bound project
    pub fn exists(&self, tag: &str) -> Result<bool, ApiError> {
        Ok(self.index.tag_exists(self.project, tag)?)
    }
}

impl std::fmt::Debug for TagScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TagScope").field("project", &self.project).finish_non_exhaustive()
    }
}
