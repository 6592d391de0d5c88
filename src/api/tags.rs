//! Tag request validators
//!
//! Each request is validated against one project's tag set. Validation only
//! reads; the returned command is handed to the service that mutates tags.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::models::HexColor;

use super::context::TagScope;
use super::error::{ApiError, ValidationErrors};
use super::fields::{optional_text, required_list, required_text};

/// Message when a tag that must be new is already used
pub const TAG_EXISTS: &str = "The tag exists.";

/// Message when a rename target is already used
pub const TAG_EXISTS_YET: &str = "The tag exists yet";

/// Message when a tag that must exist is not used
pub const TAG_MISSING: &str = "The tag doesn't exist.";

/// Message for a color that is not `#rgb` / `#rrggbb`
pub const INVALID_COLOR: &str = "The color is not a valid HEX color.";

fn check_color(errors: &mut ValidationErrors, color: Option<&str>) -> Option<HexColor> {
    let color = color?;
    match HexColor::parse(color) {
        Ok(c) => Some(c),
        Err(e) => {
            debug!("rejecting tag color: {e}");
            errors.add("color", INVALID_COLOR);
            None
        },
    }
}

// =============================================================================
// CREATE
// =============================================================================

/// Request body for creating a tag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTagRequest {
    /// Tag to create
    #[serde(default)]
    pub tag: Option<String>,
    /// Optional display color
    #[serde(default)]
    pub color: Option<String>,
}

/// A validated tag creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTag {
    /// Tag to create
    pub tag: String,
    /// Display color
    pub color: Option<HexColor>,
}

impl CreateTagRequest {
    /// Validate: the tag must be new to the project and the color well formed
    pub fn validate(&self, scope: &TagScope<'_>) -> Result<CreateTag, ApiError> {
        let mut errors = ValidationErrors::new();

        let tag = required_text(&mut errors, "tag", self.tag.as_deref());
        if let Some(tag) = &tag
            && scope.exists(tag)?
        {
            errors.add("tag", TAG_EXISTS);
        }
        let color = check_color(&mut errors, self.color.as_deref());

        errors.into_result()?;
        let tag = tag.ok_or_else(|| ApiError::internal("tag missing after validation"))?;
        debug!("create tag '{tag}' in project {} is valid", scope.project());
        Ok(CreateTag { tag, color })
    }
}

// =============================================================================
// EDIT (RENAME / RECOLOR)
// =============================================================================

/// Request body for renaming and/or recoloring a tag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditTagRequest {
    /// Existing tag
    #[serde(default)]
    pub from_tag: Option<String>,
    /// New name (None keeps the name)
    #[serde(default)]
    pub to_tag: Option<String>,
    /// New color (None keeps the color)
    #[serde(default)]
    pub color: Option<String>,
}

/// A validated tag edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditTag {
    /// Existing tag
    pub from_tag: String,
    /// New name
    pub to_tag: Option<String>,
    /// New color
    pub color: Option<HexColor>,
}

impl EditTagRequest {
    /// Validate: the source must exist, a new name must not, the color must be well formed
    pub fn validate(&self, scope: &TagScope<'_>) -> Result<EditTag, ApiError> {
        let mut errors = ValidationErrors::new();

        let from_tag = required_text(&mut errors, "from_tag", self.from_tag.as_deref());
        if let Some(tag) = &from_tag
            && !scope.exists(tag)?
        {
            errors.add("from_tag", TAG_MISSING);
        }

        let to_tag = optional_text(&mut errors, "to_tag", self.to_tag.as_deref());
        if let Some(tag) = &to_tag
            && scope.exists(tag)?
        {
            errors.add("to_tag", TAG_EXISTS_YET);
        }

        let color = check_color(&mut errors, self.color.as_deref());

        errors.into_result()?;
        let from_tag =
            from_tag.ok_or_else(|| ApiError::internal("from_tag missing after validation"))?;
        Ok(EditTag {
            from_tag,
            to_tag,
            color,
        })
    }
}

// =============================================================================
// DELETE
// =============================================================================

/// Request body for deleting a tag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTagRequest {
    /// Tag to delete
    #[serde(default)]
    pub tag: Option<String>,
}

/// A validated tag deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTag {
    /// Tag to delete
    pub tag: String,
}

impl DeleteTagRequest {
    /// Validate: the tag must exist
    pub fn validate(&self, scope: &TagScope<'_>) -> Result<DeleteTag, ApiError> {
        let mut errors = ValidationErrors::new();

        let tag = required_text(&mut errors, "tag", self.tag.as_deref());
        if let Some(tag) = &tag
            && !scope.exists(tag)?
        {
            errors.add("tag", TAG_MISSING);
        }

        errors.into_result()?;
        let tag = tag.ok_or_else(|| ApiError::internal("tag missing after validation"))?;
        Ok(DeleteTag { tag })
    }
}

// =============================================================================
// MIX
// =============================================================================

/// Request body for merging several tags into one
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MixTagsRequest {
    /// Tags to merge away
    #[serde(default)]
    pub from_tags: Option<Vec<String>>,
    /// Tag they are merged into
    #[serde(default)]
    pub to_tag: Option<String>,
}

/// A validated tag merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixTags {
    /// Tags to merge away
    pub from_tags: Vec<String>,
    /// Tag they are merged into
    pub to_tag: String,
}

impl MixTagsRequest {
    /// Validate: every source tag and the destination tag must exist
    pub fn validate(&self, scope: &TagScope<'_>) -> Result<MixTags, ApiError> {
        let mut errors = ValidationErrors::new();

        let mut from_tags = Vec::new();
        if let Some(tags) = required_list(&mut errors, "from_tags", self.from_tags.as_deref()) {
            for tag in tags.iter().map(|t| t.trim()) {
                if tag.is_empty() || !scope.exists(tag)? {
                    debug!("mix source tag '{tag}' not found in project {}", scope.project());
                    errors.add("from_tags", TAG_MISSING);
                    break;
                }
                from_tags.push(tag.to_string());
            }
        }

        let to_tag = required_text(&mut errors, "to_tag", self.to_tag.as_deref());
        if let Some(tag) = &to_tag
            && !scope.exists(tag)?
        {
            errors.add("to_tag", TAG_MISSING);
        }

        errors.into_result()?;
        let to_tag = to_tag.ok_or_else(|| ApiError::internal("to_tag missing after validation"))?;
        Ok(MixTags { from_tags, to_tag })
    }
}
