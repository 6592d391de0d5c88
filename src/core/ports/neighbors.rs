//! Neighbor resolution port

use crate::core::models::Task;

/// The tasks right before and after a task in some ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// Previous task, if any
    pub previous: Option<Task>,
    /// Next task, if any
    pub next: Option<Task>,
}

/// Finds the previous/next siblings of a task
pub trait NeighborResolver: Send + Sync {
    /// Resolve the neighbors of `task`
    fn neighbors(&self, task: &Task) -> anyhow::Result<Neighbors>;
}
