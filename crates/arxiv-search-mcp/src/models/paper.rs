//! Normalized paper and search-result models.

use serde::{Deserialize, Serialize};

/// A single normalized arXiv paper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paper {
    /// arXiv identifier extracted from the entry id URL (e.g. `2301.00001v1`).
    pub arxiv_id: String,

    /// Title with newlines folded to spaces.
    pub title: String,

    /// Author display names in feed order.
    pub authors: Vec<String>,

    /// Published timestamp, ISO 8601 when parseable, else the feed's string.
    pub published: Option<String>,

    /// Abstract text with newlines folded to spaces.
    pub summary: String,

    /// First category term, if any.
    pub primary_category: Option<String>,

    /// All category terms in feed order.
    pub categories: Vec<String>,

    /// PDF link, if the entry carried one.
    pub pdf_url: Option<String>,

    /// Abstract page link, if the entry carried one.
    pub abs_url: Option<String>,

    /// Journal reference, if any.
    pub journal_ref: Option<String>,

    /// Author comment, if any.
    pub comment: Option<String>,

    /// DOI, if any.
    pub doi: Option<String>,
}

impl Paper {
    /// Author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors.join(", ")
    }
}

/// Feed-level metadata from the OpenSearch extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedInfo {
    /// Feed title.
    #[serde(default)]
    pub title: String,

    /// Feed last-updated timestamp as reported.
    #[serde(default)]
    pub updated: String,

    /// Total results matching the query across all pages.
    #[serde(default)]
    pub total_results: u64,

    /// Index of the first entry in this page.
    #[serde(default)]
    pub start_index: u64,

    /// Page size the server applied.
    #[serde(default)]
    pub items_per_page: u64,
}

/// One page of normalized search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Feed metadata.
    pub feed_info: FeedInfo,

    /// Normalized papers in feed order.
    pub papers: Vec<Paper>,

    /// Number of papers in this page; always `papers.len()`.
    pub count: usize,
}

impl SearchResult {
    /// Build a result, deriving `count` from the paper list.
    #[must_use]
    pub fn new(feed_info: FeedInfo, papers: Vec<Paper>) -> Self {
        let count = papers.len();
        Self { feed_info, papers, count }
    }

    /// True when results remain beyond the window starting at `start`.
    #[must_use]
    pub fn has_more(&self, start: u32) -> bool {
        u64::from(start) + (self.count as u64) < self.feed_info.total_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_papers() {
        let result = SearchResult::new(
            FeedInfo::default(),
            vec![Paper::default(), Paper::default()],
        );
        assert_eq!(result.count, 2);
        assert_eq!(result.count, result.papers.len());
    }

    #[test]
    fn test_has_more() {
        let feed_info = FeedInfo { total_results: 25, ..FeedInfo::default() };
        let result = SearchResult::new(feed_info, vec![Paper::default(); 10]);
        assert!(result.has_more(0));
        assert!(result.has_more(10));
        assert!(!result.has_more(15));
    }

    #[test]
    fn test_optional_fields_serialize_as_null() {
        let json = serde_json::to_value(Paper::default()).unwrap();
        assert!(json.get("pdf_url").unwrap().is_null());
        assert!(json.get("doi").unwrap().is_null());
        assert!(json.get("published").unwrap().is_null());
    }

    #[test]
    fn test_author_names_joined() {
        let paper = Paper {
            authors: vec!["Author One".to_string(), "Author Two".to_string()],
            ..Paper::default()
        };
        assert_eq!(paper.author_names(), "Author One, Author Two");
    }
}
