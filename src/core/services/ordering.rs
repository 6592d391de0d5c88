//! Task navigation ordering
//!
//! Tasks of a project are navigated in creation order, with the project-local
//! reference number breaking ties.

use std::cmp::Ordering;

use crate::core::models::{Task, TaskId};

/// Compare two tasks in navigation order
#[must_use]
pub fn navigation_cmp(a: &Task, b: &Task) -> Ordering {
    a.created_date
        .cmp(&b.created_date)
        .then_with(|| a.reference.cmp(&b.reference))
        .then_with(|| a.id.cmp(&b.id))
}

/// Find the tasks before and after `id` in an already sorted slice
///
/// Returns `None` when `id` is not in the slice.
#[must_use]
pub fn adjacent(sorted: &[Task], id: TaskId) -> Option<(Option<&Task>, Option<&Task>)> {
    let index = sorted.iter().position(|t| t.id == id)?;
    let previous = index.checked_sub(1).and_then(|i| sorted.get(i));
    let next = sorted.get(index + 1);
    Some((previous, next))
}
