//! Text rendering for tool responses.
//!
//! Pure functions from normalized records to the strings the tool returns;
//! the paper template is fixed and starts with a newline.

use crate::models::{Paper, SearchResult};

/// Fixed reply when a search matches nothing.
pub const NO_RESULTS: &str = "No papers found matching your search criteria.";

/// Separator between paper blocks.
const PAPER_SEPARATOR: &str = "\n---\n";

/// Render one paper in the fixed multi-line template.
///
/// Absent optional fields render as empty strings.
#[must_use]
pub fn format_paper(paper: &Paper) -> String {
    format!(
        "\narXiv Id: {}\nPaper Title: {}\nAuthors: {}\nPublished: {}\nSummary: {}\nCategory: {}\n",
        paper.arxiv_id,
        paper.title,
        paper.author_names(),
        paper.published.as_deref().unwrap_or_default(),
        paper.summary,
        paper.primary_category.as_deref().unwrap_or_default(),
    )
}

/// Render a result page: header, paper blocks, and a pagination hint when
/// more results remain beyond the current window.
#[must_use]
pub fn format_search_response(result: &SearchResult, start: u32, max_results: u32) -> String {
    let total = result.feed_info.total_results;
    let shown_from = u64::from(start) + 1;
    let shown_to = u64::from(start) + result.count as u64;

    let mut response = format!(
        "Found {} papers (showing {}-{} of {} total results).\n\n",
        result.count, shown_from, shown_to, total
    );

    let summaries: Vec<String> = result.papers.iter().map(format_paper).collect();
    response.push_str(&summaries.join(PAPER_SEPARATOR));

    if result.has_more(start) {
        response.push_str(&format!(
            "\n\n--- More results available (use start={} for next page) ---",
            u64::from(start) + u64::from(max_results)
        ));
    }

    response
}
