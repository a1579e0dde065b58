//! Formatter integration tests.
//!
//! The paper template is a fixed contract; these tests pin it down
//! byte-for-byte.

use arxiv_search_mcp::formatters::{NO_RESULTS, format_paper, format_search_response};
use arxiv_search_mcp::models::{FeedInfo, Paper, SearchResult};

fn paper(id: &str, title: &str) -> Paper {
    Paper {
        arxiv_id: id.to_string(),
        title: title.to_string(),
        authors: vec!["Author One".to_string(), "Author Two".to_string()],
        published: Some("2023-01-15T12:00:00".to_string()),
        summary: "This is a test summary".to_string(),
        primary_category: Some("cs.AI".to_string()),
        ..Paper::default()
    }
}

#[test]
fn test_paper_template_exact() {
    let expected = "\n\
arXiv Id: 1234.5678\n\
Paper Title: Test Paper\n\
Authors: Author One, Author Two\n\
Published: 2023-01-15T12:00:00\n\
Summary: This is a test summary\n\
Category: cs.AI\n";

    assert_eq!(format_paper(&paper("1234.5678", "Test Paper")), expected);
}

#[test]
fn test_single_author_no_trailing_comma() {
    let mut single = paper("1234.5678", "Test Paper");
    single.authors = vec!["Only Author".to_string()];
    assert!(format_paper(&single).contains("Authors: Only Author\n"));
}

#[test]
fn test_no_results_constant() {
    assert_eq!(NO_RESULTS, "No papers found matching your search criteria.");
}

#[test]
fn test_response_layout() {
    let feed_info = FeedInfo { total_results: 3, ..FeedInfo::default() };
    let result = SearchResult::new(
        feed_info,
        vec![paper("1", "First Paper"), paper("2", "Second Paper")],
    );

    let response = format_search_response(&result, 0, 2);

    assert!(response.starts_with("Found 2 papers (showing 1-2 of 3 total results).\n\n"));
    // Two papers, one separator between them.
    assert_eq!(response.matches("\n---\n").count(), 1);
    let first = response.find("First Paper").unwrap();
    let second = response.find("Second Paper").unwrap();
    assert!(first < second);
    // One more result remains past this window.
    assert!(response.ends_with("--- More results available (use start=2 for next page) ---"));
}

#[test]
fn test_no_hint_on_last_page() {
    let feed_info = FeedInfo { total_results: 2, ..FeedInfo::default() };
    let result = SearchResult::new(feed_info, vec![paper("1", "First"), paper("2", "Second")]);

    let response = format_search_response(&result, 0, 10);
    assert!(!response.contains("More results available"));
}

#[test]
fn test_window_offsets_in_header() {
    let feed_info = FeedInfo { total_results: 40, ..FeedInfo::default() };
    let result = SearchResult::new(feed_info, vec![paper("1", "Paged")]);

    let response = format_search_response(&result, 20, 10);
    assert!(response.starts_with("Found 1 papers (showing 21-21 of 40 total results)."));
    assert!(response.ends_with("(use start=30 for next page) ---"));
}
