//! Command implementations

mod show;
mod tags;
mod validate;

use std::path::PathBuf;

use scrumkit::adapters::{CommonMarkRenderer, MemoryStore, load_dataset};
use scrumkit::api::Context;
use scrumkit::config::Settings;
use scrumkit::core::models::UserId;
use scrumkit::output::OutputMode;

pub use show::show;
pub use tags::tags;
pub use validate::validate;

/// Shared state every command starts from
#[derive(Debug)]
pub struct Env {
    settings: Settings,
    data: Option<PathBuf>,
    viewer: Option<UserId>,
    mode: OutputMode,
}

impl Env {
    pub fn new(
        settings: Settings,
        data: Option<PathBuf>,
        viewer: Option<UserId>,
        mode: OutputMode,
    ) -> Self {
        Self {
            settings,
            data,
            viewer,
            mode,
        }
    }

    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Load the dataset named on the command line or in the settings
    pub fn store(&self) -> anyhow::Result<MemoryStore> {
        let Some(path) = self.data.as_ref().or(self.settings.dataset.as_ref()) else {
            anyhow::bail!("No dataset. Pass --data <file> or set `dataset` in the config file");
        };
        Ok(load_dataset(path)?)
    }

    pub fn renderer(&self) -> CommonMarkRenderer {
        CommonMarkRenderer::new(&self.settings.markdown)
    }

    /// Build a request context over `store`
    pub fn context<'a>(&self, store: &'a MemoryStore, renderer: &'a CommonMarkRenderer) -> Context<'a> {
        Context {
            catalog: store,
            tags: store,
            markdown: renderer,
            neighbors: store,
            votes: store,
            viewer: self.viewer.or(self.settings.viewer),
        }
    }
}
