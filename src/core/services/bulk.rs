//! Bulk task text handling
//!
//! A bulk creation request carries a block of text where each line is the
//! subject of a new task.

/// Split a bulk text block into task subjects
///
/// Each line is trimmed; blank lines are dropped. Both `\n` and `\r\n`
/// line endings are accepted.
#[must_use]
pub fn split_bulk_subjects(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
