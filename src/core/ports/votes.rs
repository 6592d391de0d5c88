//! Vote ledger port

use crate::core::models::{TaskId, UserId};

/// Read access to task votes
pub trait VoteLedger: Send + Sync {
    /// Number of users that voted for the task
    fn total_voters(&self, task: TaskId) -> anyhow::Result<u64>;

    /// Whether `user` voted for the task
    fn is_voter(&self, task: TaskId, user: UserId) -> anyhow::Result<bool>;
}
