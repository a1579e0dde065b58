//! Atom feed parsing for arXiv API responses.
//!
//! Parses the raw XML body into loosely-typed [`Feed`]/[`Entry`] values with
//! a streaming `quick-xml` reader; normalization into
//! [`crate::models::SearchResult`] happens in the client layer. Elements are
//! matched by local name, so the `opensearch:` and `arxiv:` namespace
//! prefixes are transparent.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;

use crate::error::FeedResult;

/// A parsed Atom feed, before normalization.
///
/// Every field carries exactly what the document contained; defaults are
/// applied later, per field.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    /// Feed title.
    pub title: Option<String>,
    /// Feed last-updated timestamp.
    pub updated: Option<String>,
    /// OpenSearch `totalResults`, as text.
    pub total_results: Option<String>,
    /// OpenSearch `startIndex`, as text.
    pub start_index: Option<String>,
    /// OpenSearch `itemsPerPage`, as text.
    pub items_per_page: Option<String>,
    /// Entries in document order.
    pub entries: Vec<Entry>,
}

/// A single feed entry.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    /// Entry id, usually an `http://arxiv.org/abs/...` URL.
    pub id: Option<String>,
    /// Entry title.
    pub title: Option<String>,
    /// Abstract text.
    pub summary: Option<String>,
    /// Published timestamp as reported.
    pub published: Option<String>,
    /// Author display names in document order.
    pub authors: Vec<String>,
    /// All `link` elements.
    pub links: Vec<Link>,
    /// `category` term attributes in document order.
    pub categories: Vec<String>,
    /// `arxiv:journal_ref` text.
    pub journal_ref: Option<String>,
    /// `arxiv:comment` text.
    pub comment: Option<String>,
    /// `arxiv:doi` text.
    pub doi: Option<String>,
}

/// An entry link with the attributes normalization cares about.
#[derive(Debug, Clone, Default)]
pub struct Link {
    /// `rel` attribute.
    pub rel: Option<String>,
    /// `title` attribute.
    pub title: Option<String>,
    /// `href` attribute.
    pub href: Option<String>,
}

/// Parse an Atom document into a [`Feed`].
///
/// # Errors
///
/// [`crate::error::FeedError::Xml`] when the body is not well-formed XML.
pub fn parse(body: &str) -> FeedResult<Feed> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut feed = Feed::default();
    let mut entry: Option<Entry> = None;
    let mut in_author = false;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                text.clear();
                match local_name(e.name()).as_str() {
                    "entry" => entry = Some(Entry::default()),
                    "author" => in_author = entry.is_some(),
                    "link" => {
                        if let Some(current) = entry.as_mut() {
                            current.links.push(read_link(&e));
                        }
                    }
                    "category" => push_category(entry.as_mut(), &e),
                    _ => {}
                }
            }
            // Self-closing elements; arXiv emits link and category this way.
            Event::Empty(e) => match local_name(e.name()).as_str() {
                "link" => {
                    if let Some(current) = entry.as_mut() {
                        current.links.push(read_link(&e));
                    }
                }
                "category" => push_category(entry.as_mut(), &e),
                _ => {}
            },
            Event::Text(t) => {
                text.push_str(&t.unescape().unwrap_or_default());
            }
            Event::End(e) => {
                let name = local_name(e.name());
                let value = non_empty(std::mem::take(&mut text));

                if name == "entry" {
                    if let Some(done) = entry.take() {
                        feed.entries.push(done);
                    }
                } else if name == "author" {
                    in_author = false;
                } else if let Some(current) = entry.as_mut() {
                    match name.as_str() {
                        "id" => current.id = value,
                        "title" => current.title = value,
                        "summary" => current.summary = value,
                        "published" => current.published = value,
                        "name" if in_author => {
                            if let Some(author) = value {
                                current.authors.push(author);
                            }
                        }
                        "journal_ref" => current.journal_ref = value,
                        "comment" => current.comment = value,
                        "doi" => current.doi = value,
                        _ => {}
                    }
                } else {
                    match name.as_str() {
                        "title" => feed.title = value,
                        "updated" => feed.updated = value,
                        "totalResults" => feed.total_results = value,
                        "startIndex" => feed.start_index = value,
                        "itemsPerPage" => feed.items_per_page = value,
                        _ => {}
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(feed)
}

fn local_name(name: QName<'_>) -> String {
    String::from_utf8_lossy(name.local_name().as_ref()).into_owned()
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Look up an attribute by local name, skipping malformed attributes.
fn attr(e: &BytesStart<'_>, key: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key.as_bytes())
        .and_then(|a| a.unescape_value().ok())
        .map(std::borrow::Cow::into_owned)
}

fn read_link(e: &BytesStart<'_>) -> Link {
    Link { rel: attr(e, "rel"), title: attr(e, "title"), href: attr(e, "href") }
}

/// Collect plain `category` terms. The `arxiv:primary_category` element is
/// a different local name and is deliberately not collected; the first
/// `category` term is the primary.
fn push_category(entry: Option<&mut Entry>, e: &BytesStart<'_>) {
    if let Some(current) = entry {
        if let Some(term) = attr(e, "term") {
            current.categories.push(term);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <title>ArXiv Query: search_query=all:electron</title>
  <updated>2023-01-15T00:00:00-05:00</updated>
  <opensearch:totalResults>42</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>10</opensearch:itemsPerPage>
</feed>"#;

    #[test]
    fn test_parse_feed_metadata() {
        let feed = parse(MINIMAL_FEED).unwrap();
        assert_eq!(feed.title.as_deref(), Some("ArXiv Query: search_query=all:electron"));
        assert_eq!(feed.updated.as_deref(), Some("2023-01-15T00:00:00-05:00"));
        assert_eq!(feed.total_results.as_deref(), Some("42"));
        assert_eq!(feed.start_index.as_deref(), Some("0"));
        assert_eq!(feed.items_per_page.as_deref(), Some("10"));
        assert!(feed.entries.is_empty());
    }

    #[test]
    fn test_parse_entry_fields() {
        let body = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title>feed title</title>
  <entry>
    <id>http://arxiv.org/abs/1234.5678</id>
    <title>Entry Title</title>
    <summary>Entry summary.</summary>
    <published>2023-01-15T12:00:00Z</published>
    <author><name>Author One</name></author>
    <author><name>Author Two</name></author>
    <link rel="alternate" type="text/html" href="http://arxiv.org/abs/1234.5678"/>
    <link title="pdf" rel="related" href="http://arxiv.org/pdf/1234.5678"/>
    <arxiv:primary_category term="cs.AI"/>
    <category term="cs.AI"/>
    <category term="cs.LG"/>
    <arxiv:journal_ref>Phys. Rev. 47 (2023) 777</arxiv:journal_ref>
    <arxiv:comment>12 pages</arxiv:comment>
    <arxiv:doi>10.1000/xyz</arxiv:doi>
  </entry>
</feed>"#;

        let feed = parse(body).unwrap();
        assert_eq!(feed.title.as_deref(), Some("feed title"));
        assert_eq!(feed.entries.len(), 1);

        let entry = &feed.entries[0];
        assert_eq!(entry.id.as_deref(), Some("http://arxiv.org/abs/1234.5678"));
        assert_eq!(entry.authors, vec!["Author One", "Author Two"]);
        assert_eq!(entry.links.len(), 2);
        assert_eq!(entry.links[0].rel.as_deref(), Some("alternate"));
        assert_eq!(entry.links[1].title.as_deref(), Some("pdf"));
        // primary_category is not a category; the term list has exactly two.
        assert_eq!(entry.categories, vec!["cs.AI", "cs.LG"]);
        assert_eq!(entry.journal_ref.as_deref(), Some("Phys. Rev. 47 (2023) 777"));
        assert_eq!(entry.comment.as_deref(), Some("12 pages"));
        assert_eq!(entry.doi.as_deref(), Some("10.1000/xyz"));
    }

    #[test]
    fn test_entry_title_does_not_leak_into_feed() {
        let body = r#"<feed><entry><title>only entry</title></entry></feed>"#;
        let feed = parse(body).unwrap();
        assert!(feed.title.is_none());
        assert_eq!(feed.entries[0].title.as_deref(), Some("only entry"));
    }

    #[test]
    fn test_escaped_text_unescaped() {
        let body = r#"<feed><entry><title>Spin &amp; Charge</title></entry></feed>"#;
        let feed = parse(body).unwrap();
        assert_eq!(feed.entries[0].title.as_deref(), Some("Spin & Charge"));
    }

    #[test]
    fn test_malformed_xml_is_error() {
        assert!(parse("<feed><entry></feed>").is_err());
    }
}
