//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies: they operate on data passed in and return results.
//!
//! - [`bulk`] - Split a bulk text block into task subjects
//! - [`ordering`] - Navigation order and prev/next lookup over tasks

pub mod bulk;
pub mod ordering;

pub use bulk::split_bulk_subjects;
pub use ordering::{adjacent, navigation_cmp};
