//! Show a task representation

use scrumkit::api::{TaskView, represent_task};
use scrumkit::output::TaskReport;

use super::Env;

/// Print the representation of task `id`
pub fn show(env: &Env, id: u64, list: bool, neighbors: bool) -> anyhow::Result<()> {
    let store = env.store()?;
    let renderer = env.renderer();
    let ctx = env.context(&store, &renderer);

    let Some(task) = store.task(id) else {
        anyhow::bail!("Task '{id}' not found");
    };
    let view = if list {
        TaskView::List
    } else if neighbors {
        TaskView::Neighbors
    } else {
        TaskView::Detail
    };

    let data = represent_task(task, view, &ctx)?;
    TaskReport { data }.render(env.mode());
    Ok(())
}
