//! Tag and color models
//!
//! Tags are free-text labels scoped to a project. A tag may carry a display
//! color, which must be a hex color in short (`#abc`) or long (`#aabbcc`) form.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([a-fA-F0-9]{6}|[a-fA-F0-9]{3})$").expect("static pattern"));

/// Returns true if `value` is `#` followed by exactly 3 or 6 hex digits
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Error returned when a string is not a hex color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color: {0}")]
pub struct InvalidColor(pub String);

/// A validated hex color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a color string, keeping its original casing
    pub fn parse(value: &str) -> Result<Self, InvalidColor> {
        if is_hex_color(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(InvalidColor(value.to_string()))
        }
    }

    /// The color as written, including the leading `#`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag paired with its optional color
///
/// Serialized as a two-element array: `["backend", "#ff0000"]` or
/// `["backend", null]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagWithColor(pub String, pub Option<HexColor>);

impl TagWithColor {
    /// Create an uncolored tag
    #[must_use]
    pub fn plain(tag: impl Into<String>) -> Self {
        Self(tag.into(), None)
    }

    /// Create a colored tag
    #[must_use]
    pub fn colored(tag: impl Into<String>, color: HexColor) -> Self {
        Self(tag.into(), Some(color))
    }

    /// The tag label
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The tag color, if any
    #[must_use]
    pub const fn color(&self) -> Option<&HexColor> {
        self.1.as_ref()
    }
}
