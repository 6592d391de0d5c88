//! List project tags

use scrumkit::output::OutputMode;

use super::Env;

/// Print every tag used in `project`
pub fn tags(env: &Env, project: u64) -> anyhow::Result<()> {
    let store = env.store()?;
    if store.project(project).is_none() {
        anyhow::bail!("Project '{project}' not found");
    }
    let tags = store.project_tags(project);

    match env.mode() {
        OutputMode::Json => {
            println!("{}", serde_json::json!({ "project": project, "tags": tags }));
        },
        OutputMode::Human => {
            if tags.is_empty() {
                println!("No tags in project {project}.");
            }
            for tag in &tags {
                println!("  {tag}");
            }
        },
    }
    Ok(())
}
