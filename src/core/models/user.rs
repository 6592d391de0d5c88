//! User model

use serde::{Deserialize, Serialize};

use super::UserId;

/// A user that can own, be assigned to, or watch a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login name
    pub username: String,
    /// Full name, may be empty
    #[serde(default)]
    pub full_name: String,
    /// Avatar URL
    #[serde(default)]
    pub photo: Option<String>,
    /// Large avatar URL
    #[serde(default)]
    pub big_photo: Option<String>,
    /// Whether the account is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

impl User {
    /// Name to show in the UI: the full name, or the username when it is blank
    #[must_use]
    pub fn full_name_display(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}
