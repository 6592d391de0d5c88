//! Small read-only projections of records referenced by a task

use serde::Serialize;

use crate::core::models::{Status, User, UserId};

/// Status summary shown next to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    /// Status name
    pub name: String,
    /// Display color
    pub color: Option<String>,
    /// Whether the status closes the task
    pub is_closed: bool,
}

impl From<&Status> for StatusInfo {
    fn from(status: &Status) -> Self {
        Self {
            name: status.name.clone(),
            color: status.color.clone(),
            is_closed: status.is_closed,
        }
    }
}

/// Basic user info shown for owners and assignees
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    /// Login name
    pub username: String,
    /// Full name, falling back to the username
    pub full_name_display: String,
    /// Avatar URL
    pub photo: Option<String>,
    /// Large avatar URL
    pub big_photo: Option<String>,
    /// Whether the account is active
    pub is_active: bool,
    /// User ID
    pub id: UserId,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            full_name_display: user.full_name_display().to_string(),
            photo: user.photo.clone(),
            big_photo: user.big_photo.clone(),
            is_active: user.is_active,
            id: user.id,
        }
    }
}
