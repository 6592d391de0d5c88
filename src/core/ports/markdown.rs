//! Markdown rendering port

use crate::core::models::ProjectRef;

/// Renders user-written markdown into HTML
///
/// Rendering is scoped to a project so implementations can resolve
/// project-local references.
pub trait MarkdownRenderer: Send + Sync {
    /// Render `text` to HTML in the context of `project`
    fn render(&self, project: &ProjectRef, text: &str) -> String;
}
