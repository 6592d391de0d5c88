//! Tag validators against a real project tag set
//!
//! Tags used by tasks and by other items of the project count as existing.

use scrumkit::api::{
    BLANK, CreateTagRequest, DeleteTagRequest, EditTagRequest, INVALID_COLOR, MixTagsRequest,
    REQUIRED, TAG_EXISTS, TAG_EXISTS_YET, TAG_MISSING,
};

use crate::common::TestProject;

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

// =============================================================================
// CREATE
// =============================================================================

#[test]
fn test_create_tag_unused_in_project() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = CreateTagRequest {
        tag: s("frontend"),
        color: s("#A1B2C3"),
    };
    let cmd = req.validate(&ctx.tag_scope(1)).unwrap();
    assert_eq!(cmd.tag, "frontend");
    assert_eq!(cmd.color.map(String::from), s("#A1B2C3"));
}

#[test]
fn test_create_tag_used_by_task_fails() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = CreateTagRequest {
        tag: s("backend"),
        color: None,
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.errors.messages_for("tag"), vec![TAG_EXISTS]);
}

#[test]
fn test_create_tag_used_by_other_item_fails() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = CreateTagRequest {
        tag: s("story-tag"),
        color: None,
    };
    assert!(req.validate(&ctx.tag_scope(1)).is_err());
}

#[test]
fn test_create_tag_existing_elsewhere_is_fine() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = CreateTagRequest {
        tag: s("issue-tag"),
        color: None,
    };
    assert!(req.validate(&ctx.tag_scope(1)).is_ok());
}

#[test]
fn test_create_tag_missing_and_blank() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let scope = ctx.tag_scope(1);

    let err = CreateTagRequest::default().validate(&scope).unwrap_err();
    assert_eq!(err.errors.messages_for("tag"), vec![REQUIRED]);

    let req = CreateTagRequest {
        tag: s("   "),
        color: None,
    };
    let err = req.validate(&scope).unwrap_err();
    assert_eq!(err.errors.messages_for("tag"), vec![BLANK]);
}

#[test]
fn test_create_tag_bad_color() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = CreateTagRequest {
        tag: s("frontend"),
        color: s("#12345"),
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("color"), vec![INVALID_COLOR]);
    assert!(!err.errors.has("tag"));
}

// =============================================================================
// EDIT
// =============================================================================

#[test]
fn test_edit_rename_to_unused_tag() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = EditTagRequest {
        from_tag: s("ui"),
        to_tag: s("frontend"),
        color: None,
    };
    let cmd = req.validate(&ctx.tag_scope(1)).unwrap();
    assert_eq!(cmd.from_tag, "ui");
    assert_eq!(cmd.to_tag, s("frontend"));
    assert_eq!(cmd.color, None);
}

#[test]
fn test_edit_rename_onto_existing_tag_fails() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = EditTagRequest {
        from_tag: s("ui"),
        to_tag: s("bug"),
        color: None,
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("to_tag"), vec![TAG_EXISTS_YET]);
}

#[test]
fn test_edit_unknown_source_and_bad_color_reported_together() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = EditTagRequest {
        from_tag: s("ghost"),
        to_tag: None,
        color: s("blue"),
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("from_tag"), vec![TAG_MISSING]);
    assert_eq!(err.errors.messages_for("color"), vec![INVALID_COLOR]);
    assert_eq!(err.errors.len(), 2);
}

#[test]
fn test_edit_unknown_source_fails_even_with_taken_target() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = EditTagRequest {
        from_tag: s("ghost"),
        to_tag: s("bug"),
        color: None,
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("from_tag"), vec![TAG_MISSING]);
    assert_eq!(err.errors.messages_for("to_tag"), vec![TAG_EXISTS_YET]);
}

#[test]
fn test_edit_unknown_source_fails_with_free_target() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = EditTagRequest {
        from_tag: s("ghost"),
        to_tag: s("frontend"),
        color: None,
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("from_tag"), vec![TAG_MISSING]);
    assert!(!err.errors.has("to_tag"));
}

#[test]
fn test_edit_recolor_only() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = EditTagRequest {
        from_tag: s("backend"),
        to_tag: None,
        color: s("#0f0"),
    };
    let cmd = req.validate(&ctx.tag_scope(1)).unwrap();
    assert_eq!(cmd.color.map(String::from), s("#0f0"));
}

// =============================================================================
// DELETE
// =============================================================================

#[test]
fn test_delete_existing_tag() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = DeleteTagRequest { tag: s("bug") };
    assert_eq!(req.validate(&ctx.tag_scope(1)).unwrap().tag, "bug");
}

#[test]
fn test_delete_tag_of_other_project_fails() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = DeleteTagRequest { tag: s("issue-tag") };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("tag"), vec![TAG_MISSING]);
}

// =============================================================================
// MIX
// =============================================================================

#[test]
fn test_mix_existing_tags() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = MixTagsRequest {
        from_tags: Some(vec!["ui".to_string(), "bug".to_string()]),
        to_tag: s("backend"),
    };
    let cmd = req.validate(&ctx.tag_scope(1)).unwrap();
    assert_eq!(cmd.from_tags, vec!["ui", "bug"]);
    assert_eq!(cmd.to_tag, "backend");
}

#[test]
fn test_mix_unknown_destination_fails() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = MixTagsRequest {
        from_tags: Some(vec!["ui".to_string()]),
        to_tag: s("frontend"),
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("to_tag"), vec![TAG_MISSING]);
    assert!(!err.errors.has("from_tags"));
}

#[test]
fn test_mix_reports_missing_source_once() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = MixTagsRequest {
        from_tags: Some(vec!["ghost".to_string(), "phantom".to_string()]),
        to_tag: s("ui"),
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("from_tags"), vec![TAG_MISSING]);
}

#[test]
fn test_mix_empty_sources_is_required() {
    let fx = TestProject::new();
    let ctx = fx.ctx();
    let req = MixTagsRequest {
        from_tags: Some(Vec::new()),
        to_tag: s("ui"),
    };
    let err = req.validate(&ctx.tag_scope(1)).unwrap_err();
    assert_eq!(err.errors.messages_for("from_tags"), vec![REQUIRED]);
}
