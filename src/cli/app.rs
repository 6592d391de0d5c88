//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use scrumkit::config::Settings;
use scrumkit::output::OutputMode;

/// scrumkit - Validate task and tag requests against a project dataset
#[derive(Parser, Debug)]
#[command(
    name = "scrumkit",
    version,
    about = "Validate task and tag requests against a project dataset",
    long_about = "Run request bodies through the task and tag validators, and render \
                  task representations, using a TOML dataset in place of a database."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Dataset file (overrides the configured dataset)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/scrumkit/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Render for this user ID (affects is_watcher / is_voter)
    #[arg(long = "as", global = true)]
    pub viewer: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON request body
    Validate {
        /// Request kind: create-tag, edit-tag, delete-tag, mix-tags, create-task,
        /// bulk-create, bulk-order
        kind: String,

        /// Path to the JSON body ("-" reads stdin)
        body: String,

        /// Project the request is bound to (tag requests)
        #[arg(short, long)]
        project: Option<u64>,
    },

    /// Show a task representation
    Show {
        /// Task ID
        id: u64,

        /// Lightweight list representation
        #[arg(long, conflicts_with = "neighbors")]
        list: bool,

        /// Include previous/next neighbors
        #[arg(long)]
        neighbors: bool,
    },

    /// List the tags used in a project
    Tags {
        /// Project ID
        project: u64,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let env = commands::Env::new(settings, cli.data, cli.viewer, output_mode);
    let bare = cli.command.is_none();

    match cli.command {
        Some(Command::Validate {
            kind,
            body,
            project,
        }) => commands::validate(&env, &kind, &body, project),
        Some(Command::Show {
            id,
            list,
            neighbors,
        }) => commands::show(&env, id, list, neighbors),
        Some(Command::Tags { project }) => commands::tags(&env, project),
        Some(Command::Version) | None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": scrumkit::VERSION
                    })
                );
            } else {
                println!("scrumkit v{}", scrumkit::VERSION);
                if bare {
                    println!("\nRun 'scrumkit --help' for usage");
                }
            }
            Ok(())
        },
    }
}
