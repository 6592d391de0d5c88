//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the validation and
//! representation logic and the systems it consults: persistence lookups,
//! the project tag index, markdown rendering, neighbor resolution, and votes.
//!
//! Implementations live in the `adapters` module.

mod catalog;
mod markdown;
mod neighbors;
mod tag_index;
mod votes;

pub use catalog::Catalog;
pub use markdown::MarkdownRenderer;
pub use neighbors::{NeighborResolver, Neighbors};
pub use tag_index::TagIndex;
pub use votes::VoteLedger;
