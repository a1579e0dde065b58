//! Feed-to-record normalization.
//!
//! Deterministic mapping from the loose Atom [`Feed`] into the normalized
//! [`SearchResult`]. Every rule here is observable in the tool's output, so
//! changes are breaking.

use chrono::NaiveDateTime;

use crate::error::{FeedError, FeedResult};
use crate::feed::{Entry, Feed};
use crate::models::{FeedInfo, Paper, SearchResult};

/// Timestamp layout used by arXiv's Atom feeds.
const PUBLISHED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Normalize a parsed feed into a search result.
///
/// A feed with zero entries is a valid result with `count == 0`.
///
/// # Errors
///
/// [`FeedError::InvalidNumber`] when an OpenSearch counter is present but
/// not an integer.
pub fn search_result_from_feed(feed: Feed) -> FeedResult<SearchResult> {
    let feed_info = FeedInfo {
        title: feed.title.unwrap_or_default(),
        updated: feed.updated.unwrap_or_default(),
        total_results: parse_counter("totalResults", feed.total_results)?,
        start_index: parse_counter("startIndex", feed.start_index)?,
        items_per_page: parse_counter("itemsPerPage", feed.items_per_page)?,
    };

    let papers = feed.entries.into_iter().map(paper_from_entry).collect();

    Ok(SearchResult::new(feed_info, papers))
}

/// Counters default to 0 when absent; present garbage is a parse failure.
fn parse_counter(field: &'static str, value: Option<String>) -> FeedResult<u64> {
    match value {
        None => Ok(0),
        Some(v) => {
            v.trim().parse().map_err(|_| FeedError::InvalidNumber { field, value: v })
        }
    }
}

/// Normalize a single entry into a paper.
#[must_use]
pub fn paper_from_entry(entry: Entry) -> Paper {
    let id = entry.id.unwrap_or_default();
    let arxiv_id = match id.rsplit_once("/abs/") {
        Some((_, tail)) => tail.to_string(),
        None => id.clone(),
    };

    let mut pdf_url = None;
    let mut abs_url = None;
    for link in &entry.links {
        let Some(href) = link.href.as_ref() else { continue };
        if link.rel.as_deref() == Some("alternate") {
            abs_url = Some(href.clone());
        } else if link.title.as_deref() == Some("pdf") {
            pdf_url = Some(href.clone());
        }
    }

    let primary_category = entry.categories.first().cloned();

    let published = entry.published.map(|p| {
        NaiveDateTime::parse_from_str(&p, PUBLISHED_FORMAT)
            .map_or(p, |dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    });

    Paper {
        arxiv_id,
        title: entry.title.map(|t| fold_newlines(&t)).unwrap_or_default(),
        authors: entry.authors,
        published,
        summary: entry.summary.map(|s| fold_newlines(&s)).unwrap_or_default(),
        primary_category,
        categories: entry.categories,
        pdf_url,
        abs_url,
        journal_ref: entry.journal_ref,
        comment: entry.comment,
        doi: entry.doi,
    }
}

/// Replace newlines with spaces and trim; interior spacing is untouched.
fn fold_newlines(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}
