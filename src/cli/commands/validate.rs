//! Validate a request body

use std::io::Read;

use scrumkit::api::{RequestKind, validate_request};
use scrumkit::output::ValidationReport;

use super::Env;

/// Validate the JSON body at `source` as a request of `kind`
pub fn validate(env: &Env, kind: &str, source: &str, project: Option<u64>) -> anyhow::Result<()> {
    let kind: RequestKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let body = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };

    if project.is_some() && !kind.is_tag_request() {
        log::warn!("--project is ignored for {kind} requests");
    }

    let store = env.store()?;
    let renderer = env.renderer();
    let ctx = env.context(&store, &renderer);

    log::debug!("validating {kind} request from {source}");
    let report = ValidationReport {
        kind: kind.to_string(),
        outcome: validate_request(kind, &body, project, &ctx),
    };
    report.render(env.mode());

    if !report.passed() {
        std::process::exit(1);
    }
    Ok(())
}
