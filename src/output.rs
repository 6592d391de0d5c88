//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::api::{ApiError, ApiResponse};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of validating one request body
#[derive(Debug)]
pub struct ValidationReport {
    /// Request kind (e.g. "create-tag")
    pub kind: String,
    /// Validated command on success, error on failure
    pub outcome: Result<serde_json::Value, ApiError>,
}

impl ValidationReport {
    /// Whether the request passed validation
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(&self.envelope()),
        }
    }

    fn envelope(&self) -> ApiResponse<&serde_json::Value> {
        match &self.outcome {
            Ok(value) => ApiResponse::success(value),
            Err(err) => ApiResponse::from_result(Err(err.clone())),
        }
    }

    fn render_human(&self) {
        match &self.outcome {
            Ok(value) => {
                println!("{} {}", "VALID".green().bold(), self.kind);
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            },
            Err(err) => {
                println!("{} {} ({})", "INVALID".red().bold(), self.kind, err.status_code());
                if err.errors.is_empty() {
                    println!("  {}", err.message);
                }
                for e in err.errors.iter() {
                    println!("  {}: {}", e.field.bold(), e.message);
                }
            },
        }
    }
}

/// A task representation ready to print
#[derive(Debug)]
pub struct TaskReport {
    /// The representation
    pub data: serde_json::Value,
}

impl TaskReport {
    /// Render the representation based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(&ApiResponse::success(&self.data)),
        }
    }

    fn render_human(&self) {
        let field = |name: &str| self.data.get(name).cloned().unwrap_or_default();
        let closed = field("is_closed").as_bool().unwrap_or(false);
        let marker = if closed { "closed".dimmed() } else { "open".green() };
        println!("#{} {} [{}]", field("ref"), field("subject").as_str().unwrap_or_default(), marker);
        if let Some(slug) = field("milestone_slug").as_str() {
            println!("  sprint: {slug}");
        }
        if let Some(tags) = field("tags").as_array().filter(|t| !t.is_empty()) {
            let names: Vec<&str> =
                tags.iter().filter_map(|t| t.get(0).and_then(serde_json::Value::as_str)).collect();
            println!("  tags: {}", names.join(", "));
        }
        if let Some(neighbors) = self.data.get("neighbors") {
            let describe = |side: &str| {
                neighbors
                    .get(side)
                    .and_then(|n| n.get("ref"))
                    .map_or_else(|| "-".to_string(), |r| format!("#{r}"))
            };
            println!("  previous: {}  next: {}", describe("previous"), describe("next"));
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
