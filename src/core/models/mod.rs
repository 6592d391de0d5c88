//! Domain models for scrumkit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A unit of work inside a project, optionally in a sprint
//! - [`TagWithColor`] - A tag label paired with its display color
//! - [`HexColor`] - A validated `#rgb` / `#rrggbb` color
//! - [`Project`], [`Milestone`], [`Status`], [`User`] - Related records a task points at

mod project;
mod tag;
mod task;
mod user;

pub use project::{Milestone, Project, ProjectRef, Status, UserStory};
pub use tag::{HexColor, InvalidColor, TagWithColor, is_hex_color};
pub use task::Task;
pub use user::User;

/// Identifier of a project
pub type ProjectId = u64;

/// Identifier of a milestone (sprint)
pub type MilestoneId = u64;

/// Identifier of a task status
pub type StatusId = u64;

/// Identifier of a user story
pub type UserStoryId = u64;

/// Identifier of a task
pub type TaskId = u64;

/// Identifier of a user
pub type UserId = u64;
