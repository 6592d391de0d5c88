//! Task write payload tests

use scrumkit::api::{
    BLANK, INVALID_ASSIGNEE, INVALID_COLOR, INVALID_WATCHERS, NO_PROJECT, NO_SPRINT, NO_STATUS,
    NO_USER_STORY, REQUIRED, TaskInput,
};
use scrumkit::core::models::TagWithColor;

use crate::common::TestProject;

fn parse(body: &str) -> TaskInput {
    serde_json::from_str(body).unwrap()
}

// =============================================================================
// CREATE
// =============================================================================

#[test]
fn test_create_minimal_task() {
    let fx = TestProject::new();
    let input = parse(r#"{"project": 1, "subject": "  New task  "}"#);
    let changes = input.validate_create(&fx.ctx()).unwrap();
    assert_eq!(changes.project, 1);
    assert_eq!(changes.subject.as_deref(), Some("New task"));
    assert_eq!(changes.tags, None);
}

#[test]
fn test_create_requires_project_and_subject() {
    let fx = TestProject::new();
    let err = parse("{}").validate_create(&fx.ctx()).unwrap_err();
    assert_eq!(err.errors.messages_for("project"), vec![REQUIRED]);
    assert_eq!(err.errors.messages_for("subject"), vec![REQUIRED]);

    let err = parse(r#"{"project": 1, "subject": ""}"#).validate_create(&fx.ctx()).unwrap_err();
    assert_eq!(err.errors.messages_for("subject"), vec![BLANK]);
}

#[test]
fn test_create_checks_every_reference() {
    let fx = TestProject::new();
    let input = parse(
        r#"{"project": 9, "subject": "x", "milestone": 99, "status": 99, "user_story": 99}"#,
    );
    let err = input.validate_create(&fx.ctx()).unwrap_err();
    assert_eq!(err.errors.messages_for("project"), vec![NO_PROJECT]);
    assert_eq!(err.errors.messages_for("milestone"), vec![NO_SPRINT]);
    assert_eq!(err.errors.messages_for("status"), vec![NO_STATUS]);
    assert_eq!(err.errors.messages_for("user_story"), vec![NO_USER_STORY]);
}

#[test]
fn test_create_members_only() {
    let fx = TestProject::new();
    let input = parse(r#"{"project": 2, "subject": "x", "assigned_to": 2, "watchers": [1, 2]}"#);
    let err = input.validate_create(&fx.ctx()).unwrap_err();
    assert_eq!(err.errors.messages_for("assigned_to"), vec![INVALID_ASSIGNEE]);
    assert_eq!(err.errors.messages_for("watchers"), vec![INVALID_WATCHERS]);
}

#[test]
fn test_create_normalizes_tags() {
    let fx = TestProject::new();
    let input = parse(
        r##"{"project": 1, "subject": "x", "tags": [" api ", ["db", "#abc"], ["api", null], ["ui", null]]}"##,
    );
    let changes = input.validate_create(&fx.ctx()).unwrap();
    let tags = changes.tags.unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[0], TagWithColor::plain("api"));
    assert_eq!(tags[1].color().map(|c| c.as_str()), Some("#abc"));
    assert_eq!(tags[2], TagWithColor::plain("ui"));
}

#[test]
fn test_create_repeated_tag_takes_last_color() {
    let fx = TestProject::new();
    let input = parse(
        r##"{"project": 1, "subject": "x", "tags": [["a", "#f00"], "b", ["a", "#0f0"]]}"##,
    );
    let tags = input.validate_create(&fx.ctx()).unwrap().tags.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].tag(), "a");
    assert_eq!(tags[0].color().map(|c| c.as_str()), Some("#0f0"));
    assert_eq!(tags[1], TagWithColor::plain("b"));
}

#[test]
fn test_create_rejects_bad_tag_color() {
    let fx = TestProject::new();
    let input = parse(r#"{"project": 1, "subject": "x", "tags": [["db", "teal"]]}"#);
    let err = input.validate_create(&fx.ctx()).unwrap_err();
    assert_eq!(err.errors.messages_for("tags"), vec![INVALID_COLOR]);
}

// =============================================================================
// UPDATE
// =============================================================================

#[test]
fn test_update_applies_present_fields_only() {
    let fx = TestProject::new();
    let mut task = fx.task(102).clone();
    let input = parse(
        r#"{"description": "Now with *details*", "is_blocked": true, "watchers": [2], "tags": ["docs"]}"#,
    );
    let changes = input.validate_update(&task, &fx.ctx()).unwrap();
    changes.apply(&mut task);

    assert_eq!(task.subject, "Write docs");
    assert_eq!(task.description, "Now with *details*");
    assert!(task.is_blocked);
    assert_eq!(task.watchers, vec![2]);
    assert_eq!(task.tags, vec![TagWithColor::plain("docs")]);
    assert_eq!(changes.input().is_blocked, Some(true));
}

#[test]
fn test_update_cannot_move_project() {
    let fx = TestProject::new();
    let task = fx.task(100);
    let err = parse(r#"{"project": 2}"#).validate_update(task, &fx.ctx()).unwrap_err();
    assert!(err.errors.has("project"));

    assert!(parse(r#"{"project": 1}"#).validate_update(task, &fx.ctx()).is_ok());
}

#[test]
fn test_update_blank_subject_fails() {
    let fx = TestProject::new();
    let err = parse(r#"{"subject": " "}"#).validate_update(fx.task(100), &fx.ctx()).unwrap_err();
    assert_eq!(err.errors.messages_for("subject"), vec![BLANK]);
}

#[test]
fn test_update_ignores_server_managed_fields() {
    let fx = TestProject::new();
    let input = parse(r#"{"id": 5, "ref": 9, "owner": 2, "subject": "Renamed"}"#);
    let mut task = fx.task(100).clone();
    input.validate_update(&task, &fx.ctx()).unwrap().apply(&mut task);
    assert_eq!(task.id, 100);
    assert_eq!(task.reference, 1);
    assert_eq!(task.owner.map(|u| u.id), Some(1));
    assert_eq!(task.subject, "Renamed");
}
