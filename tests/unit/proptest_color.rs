//! Property-based tests for hex colors and bulk subjects
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use scrumkit::core::models::{HexColor, is_hex_color};
use scrumkit::core::services::split_bulk_subjects;

proptest! {
    /// Three or six hex digits after a hash are always valid
    #[test]
    fn hex_digits_are_valid(digits in "([0-9a-fA-F]{3}|[0-9a-fA-F]{6})") {
        let color = format!("#{digits}");
        prop_assert!(is_hex_color(&color));
        let parsed = HexColor::parse(&color).unwrap();
        prop_assert_eq!(parsed.as_str(), color.as_str());
    }

    /// Any other digit count is invalid
    #[test]
    fn other_lengths_are_invalid(digits in "[0-9a-f]{0,10}") {
        prop_assume!(digits.len() != 3 && digits.len() != 6);
        let color = format!("#{digits}");
        prop_assert!(!is_hex_color(&color));
    }

    /// Without the hash nothing is a color
    #[test]
    fn missing_hash_is_invalid(digits in "[0-9a-f]{3,6}") {
        prop_assert!(!is_hex_color(&digits));
    }

    /// Every subject is trimmed and non-empty
    #[test]
    fn bulk_subjects_are_trimmed(lines in prop::collection::vec("[ a-z]{0,8}", 0..8)) {
        let text = lines.join("\n");
        let subjects = split_bulk_subjects(&text);
        let expected = lines.iter().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(subjects.len(), expected);
        for subject in &subjects {
            prop_assert!(!subject.is_empty());
            prop_assert_eq!(subject.trim(), subject.as_str());
        }
    }
}
