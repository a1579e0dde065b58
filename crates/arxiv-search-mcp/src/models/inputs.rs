//! Input model for the `paper_search` tool.

use serde::{Deserialize, Serialize};

use super::{SortBy, SortOrder};
use crate::config::limits;

/// Parameters accepted by the `paper_search` tool.
///
/// Every field is optional on the wire. `query` is the raw-query escape
/// hatch and takes precedence over the structured fields whenever it is
/// non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperSearchInput {
    /// Raw arXiv query string.
    #[serde(default)]
    pub query: String,

    /// Search in paper titles.
    #[serde(default)]
    pub title: String,

    /// Search for a specific author.
    #[serde(default)]
    pub author: String,

    /// Search in paper abstracts.
    #[serde(default)]
    pub r#abstract: String,

    /// arXiv category (e.g. `cs.AI`, `math.CO`).
    #[serde(default)]
    pub category: String,

    /// Journal reference.
    #[serde(default)]
    pub journal_ref: String,

    /// Report number.
    #[serde(default)]
    pub report_number: String,

    /// Boolean operator joining structured fields.
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Sort criterion.
    #[serde(default)]
    pub sort_by: SortBy,

    /// Sort order.
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Starting index for pagination.
    #[serde(default)]
    pub start: u32,

    /// Maximum number of results; values above the cap are clamped.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

fn default_operator() -> String {
    "AND".to_string()
}

fn default_max_results() -> u32 {
    limits::DEFAULT_MAX_RESULTS
}

impl Default for PaperSearchInput {
    fn default() -> Self {
        Self {
            query: String::new(),
            title: String::new(),
            author: String::new(),
            r#abstract: String::new(),
            category: String::new(),
            journal_ref: String::new(),
            report_number: String::new(),
            operator: default_operator(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            start: 0,
            max_results: default_max_results(),
        }
    }
}
