//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - [`memory`] - In-memory store implementing every lookup port
//! - [`fixture`] - TOML dataset files loaded into a [`memory::MemoryStore`]
//! - [`markdown`] - `pulldown-cmark` backed markdown rendering

pub mod fixture;
pub mod markdown;
pub mod memory;

pub use fixture::{FixtureError, load_dataset, parse_dataset};
pub use markdown::CommonMarkRenderer;
pub use memory::MemoryStore;
