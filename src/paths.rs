//! Centralized path definitions for scrumkit
//!
//! ```text
//! ~/.config/scrumkit/
//! └── config.toml               # User settings
//! ```

use std::path::PathBuf;

/// Application directory name
const APP_DIR: &str = "scrumkit";

/// Settings filename
pub const CONFIG_FILE: &str = "config.toml";

/// Global configuration directory (`~/.config/scrumkit`)
///
/// Falls back to `.scrumkit` in the working directory when the platform has
/// no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".scrumkit"), |d| d.join(APP_DIR))
}

/// Global settings file
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
