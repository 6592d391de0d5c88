//! Field-level checks shared by the request validators

use super::error::ValidationErrors;

/// Message for a required field that is missing
pub const REQUIRED: &str = "This field is required.";

/// Message for a required text field that is blank
pub const BLANK: &str = "This field may not be blank.";

/// Check a required text field, returning the trimmed value when usable
pub fn required_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) -> Option<String> {
    match value.map(str::trim) {
        None => {
            errors.add(field, REQUIRED);
            None
        },
        Some("") => {
            errors.add(field, BLANK);
            None
        },
        Some(v) => Some(v.to_string()),
    }
}

/// Check an optional text field: absent is fine, blank is not
pub fn optional_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) -> Option<String> {
    match value.map(str::trim) {
        None => None,
        Some("") => {
            errors.add(field, BLANK);
            None
        },
        Some(v) => Some(v.to_string()),
    }
}

/// Check a required field of any type
pub fn required<T: Copy>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, REQUIRED);
    }
    value
}

/// Check a required list field; an empty list counts as missing
pub fn required_list<'a, T>(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&'a [T]>,
) -> Option<&'a [T]> {
    match value {
        Some(items) if !items.is_empty() => Some(items),
        _ => {
            errors.add(field, REQUIRED);
            None
        },
    }
}
