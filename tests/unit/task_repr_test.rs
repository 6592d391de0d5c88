//! Task representation tests
//!
//! Checks the outgoing shapes as JSON, since that is what clients see.

use scrumkit::api::{
    Context, Engagement, TaskDetail, TaskListItem, TaskNeighbors, TaskView, represent_task,
};
use serde_json::{Value, json};

use crate::common::TestProject;
use crate::common::mocks::BrokenBackend;

fn detail(fx: &TestProject, id: u64, viewer: Option<u64>) -> Value {
    let ctx = fx.ctx().with_viewer(viewer);
    serde_json::to_value(TaskDetail::from_task(fx.task(id), &ctx).unwrap()).unwrap()
}

// =============================================================================
// FULL
// =============================================================================

#[test]
fn test_detail_core_fields() {
    let fx = TestProject::new();
    let value = detail(&fx, 100, None);

    assert_eq!(value["id"], 100);
    assert_eq!(value["ref"], 1);
    assert_eq!(value["project"], 1);
    assert_eq!(value["subject"], "Set up CI");
    assert_eq!(value["milestone"], 10);
    assert_eq!(value["milestone_slug"], "sprint-1");
    assert_eq!(value["status"], 20);
    assert_eq!(value["is_closed"], false);
    assert_eq!(value["comment"], "");
    assert_eq!(value["tags"], json!([["backend", "#f00"], ["ui", null]]));
}

#[test]
fn test_detail_extra_info() {
    let fx = TestProject::new();
    let value = detail(&fx, 100, None);

    assert_eq!(
        value["status_extra_info"],
        json!({"name": "New", "color": "#999", "is_closed": false})
    );
    assert_eq!(value["owner"], 1);
    assert_eq!(value["owner_extra_info"]["full_name_display"], "Ada Lovelace");
    assert_eq!(value["owner_extra_info"]["photo"], "https://img.example.com/ada.png");
    assert_eq!(value["assigned_to"], Value::Null);
    assert_eq!(value["assigned_to_extra_info"], Value::Null);
}

#[test]
fn test_detail_full_name_falls_back_to_username() {
    let fx = TestProject::new();
    let value = detail(&fx, 101, None);
    assert_eq!(value["assigned_to_extra_info"]["full_name_display"], "bob");
}

#[test]
fn test_detail_renders_markdown() {
    let fx = TestProject::new();
    let value = detail(&fx, 100, None);
    let html = value["description_html"].as_str().unwrap();
    assert!(html.contains("<strong>GitHub Actions</strong>"), "{html}");
    assert!(html.contains(r#"href="/project/demo/ref/2""#), "{html}");

    let value = detail(&fx, 101, None);
    assert!(value["blocked_note_html"].as_str().unwrap().contains("<em>design</em>"));
    assert_eq!(value["description_html"], "");
}

#[test]
fn test_detail_closed_status() {
    let fx = TestProject::new();
    assert_eq!(detail(&fx, 101, None)["is_closed"], true);
    assert_eq!(detail(&fx, 102, None)["is_closed"], false);
    assert_eq!(detail(&fx, 102, None)["milestone_slug"], Value::Null);
}

#[test]
fn test_detail_engagement_depends_on_viewer() {
    let fx = TestProject::new();

    let anonymous = detail(&fx, 100, None);
    assert_eq!(anonymous["is_watcher"], false);
    assert_eq!(anonymous["is_voter"], false);
    assert_eq!(anonymous["total_watchers"], 1);
    assert_eq!(anonymous["total_voters"], 2);

    let ada = detail(&fx, 100, Some(1));
    assert_eq!(ada["is_watcher"], true);
    assert_eq!(ada["is_voter"], true);

    let bob = detail(&fx, 100, Some(2));
    assert_eq!(bob["is_watcher"], false);
    assert_eq!(bob["is_voter"], true);
}

#[test]
fn test_engagement_for_task_without_votes() {
    let fx = TestProject::new();
    let ctx = fx.ctx().with_viewer(Some(1));
    let engagement = Engagement::for_task(fx.task(102), &ctx).unwrap();
    assert_eq!(
        engagement,
        Engagement {
            is_watcher: false,
            total_watchers: 0,
            is_voter: false,
            total_voters: 0,
        }
    );
}

// =============================================================================
// LIST
// =============================================================================

#[test]
fn test_list_item_omits_rendered_fields() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let value = serde_json::to_value(TaskListItem::from_task(fx.task(100), &ctx).unwrap()).unwrap();

    assert_eq!(value["subject"], "Set up CI");
    assert_eq!(value["milestone_slug"], "sprint-1");
    assert_eq!(value["total_voters"], 2);
    assert!(value.get("description").is_none());
    assert!(value.get("description_html").is_none());
    assert!(value.get("blocked_note_html").is_none());
    assert!(value.get("comment").is_none());
}

#[test]
fn test_list_items_for_project() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let tasks = fx.store.project_tasks(1);
    let items = TaskListItem::from_tasks(&tasks, &ctx).unwrap();
    let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![100, 101, 102]);
}

// =============================================================================
// NEIGHBORS
// =============================================================================

#[test]
fn test_neighbors_in_the_middle() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let value = serde_json::to_value(TaskNeighbors::from_task(fx.task(101), &ctx).unwrap()).unwrap();

    assert_eq!(value["id"], 101);
    assert_eq!(value["description_html"], "");
    assert_eq!(value["neighbors"]["previous"], json!({"id": 100, "ref": 1, "subject": "Set up CI"}));
    assert_eq!(value["neighbors"]["next"], json!({"id": 102, "ref": 3, "subject": "Write docs"}));
}

#[test]
fn test_neighbors_at_the_edges() {
    let fx = TestProject::new();
    let ctx = fx.ctx();

    let first = TaskNeighbors::from_task(fx.task(100), &ctx).unwrap();
    assert!(first.neighbors.previous.is_none());
    assert_eq!(first.neighbors.next.map(|n| n.id), Some(101));

    let last = TaskNeighbors::from_task(fx.task(102), &ctx).unwrap();
    assert_eq!(last.neighbors.previous.map(|n| n.id), Some(101));
    assert!(last.neighbors.next.is_none());
}

#[test]
fn test_neighbors_stay_inside_the_project() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let only = TaskNeighbors::from_task(fx.task(200), &ctx).unwrap();
    assert!(only.neighbors.previous.is_none());
    assert!(only.neighbors.next.is_none());
}

// =============================================================================
// VIEWS AND FAILURES
// =============================================================================

#[test]
fn test_represent_task_views() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let task = fx.task(100);

    let detail = represent_task(task, TaskView::Detail, &ctx).unwrap();
    assert!(detail.get("description_html").is_some());
    assert!(detail.get("neighbors").is_none());

    let list = represent_task(task, TaskView::List, &ctx).unwrap();
    assert!(list.get("description_html").is_none());

    let neighbors = represent_task(task, TaskView::Neighbors, &ctx).unwrap();
    assert!(neighbors.get("neighbors").is_some());
}

#[test]
fn test_lookup_failure_is_internal_error() {
    let fx = TestProject::new();
    let broken = BrokenBackend;
    let ctx = Context {
        catalog: &broken,
        tags: &broken,
        markdown: &fx.renderer,
        neighbors: &broken,
        votes: &broken,
        viewer: None,
    };
    let err = represent_task(fx.task(100), TaskView::Detail, &ctx).unwrap_err();
    assert_eq!(err.status_code(), 500);
}
