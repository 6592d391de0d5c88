//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and the validators
//! and representations built on them. Any HTTP server implementation, or a
//! client like the CLI, can drive it directly.
//!
//! ## Design
//!
//! - **Validators read, never write**: they return a validated command or an error
//! - **Errors are aggregated**: every field is checked before a request is rejected
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod bulk;
mod context;
mod error;
mod fields;
mod handlers;
mod summary;
mod tags;
mod task_input;
mod tasks;
mod types;

pub use bulk::{
    TaskOrder, TaskOrderEntry, TasksBulk, TasksBulkRequest, TasksOrderBulk,
    UpdateTasksOrderBulkRequest,
};
pub use context::{Context, TagScope};
pub use error::{ApiError, ApiErrorData, ErrorCode, FieldError, NON_FIELD_ERRORS, ValidationErrors};
pub use fields::{BLANK, REQUIRED};
pub use handlers::{RequestKind, TaskView, represent_task, validate_request};
pub use summary::{StatusInfo, UserInfo};
pub use tags::{
    CreateTag, CreateTagRequest, DeleteTag, DeleteTagRequest, EditTag, EditTagRequest,
    INVALID_COLOR, MixTags, MixTagsRequest, TAG_EXISTS, TAG_EXISTS_YET, TAG_MISSING,
};
pub use task_input::{
    INVALID_ASSIGNEE, INVALID_WATCHERS, NO_PROJECT, NO_SPRINT, NO_STATUS, NO_TASK, NO_USER_STORY,
    TagInput, TaskChanges, TaskInput,
};
pub use tasks::{Engagement, NeighborStub, NeighborsData, TaskDetail, TaskListItem, TaskNeighbors};
pub use types::ApiResponse;
