//! Global configuration management
//!
//! Settings are stored at `~/.config/scrumkit/config.toml` (XDG standard).
//! A missing file means defaults; a malformed one is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::UserId;
use crate::paths;

/// Global scrumkit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Markdown rendering options
    #[serde(default)]
    pub markdown: MarkdownSettings,
    /// Dataset loaded when `--data` is not given
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    /// User representations are rendered for when `--as` is not given
    #[serde(default)]
    pub viewer: Option<UserId>,
}

/// Markdown rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownSettings {
    /// Enable GFM tables
    pub tables: bool,
    /// Enable `~~strikethrough~~`
    pub strikethrough: bool,
    /// Enable `- [ ]` task lists
    pub tasklists: bool,
    /// Prefix for project reference links (e.g. `https://board.example.com`)
    pub base_url: String,
}

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            base_url: String::new(),
        }
    }
}

impl Settings {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load settings from the default location, or defaults if absent
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))?;
        Ok(settings)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
