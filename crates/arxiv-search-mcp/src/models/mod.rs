//! Data models for the arXiv search tool.
//!
//! Normalized records serialize optional fields as `null` when absent,
//! never as missing keys.

mod enums;
mod inputs;
mod paper;

pub use enums::{SortBy, SortOrder};
pub use inputs::PaperSearchInput;
pub use paper::{FeedInfo, Paper, SearchResult};
