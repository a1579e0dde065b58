//! arXiv search-query construction.
//!
//! Two modes: a raw query string passed through verbatim, or structured
//! fields tagged and joined with a boolean operator. Raw mode wins whenever
//! it is non-empty.

use crate::error::QueryError;

/// Structured search fields, emitted in a fixed order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFields<'a> {
    /// Title search terms (`ti:`).
    pub title: &'a str,
    /// Author name (`au:`).
    pub author: &'a str,
    /// Abstract search terms (`abs:`).
    pub r#abstract: &'a str,
    /// Category identifier (`cat:`), e.g. `cs.AI`.
    pub category: &'a str,
    /// Journal reference (`jr:`).
    pub journal_ref: &'a str,
    /// Report number (`rn:`).
    pub report_number: &'a str,
}

/// Substrings that force phrase quoting.
const QUOTE_TRIGGERS: &[&str] = &[" ", ":", "+", "-", "(", ")", "[", "]", "AND", "OR", "NOT"];

/// Build the final arXiv query string.
///
/// A non-empty `raw` query takes precedence over every structured field and
/// is returned trimmed but otherwise verbatim. Structured fields are tagged,
/// quoted where needed, and joined with `" <operator> "`.
///
/// # Errors
///
/// [`QueryError::Empty`] when `raw` is blank and every structured field is
/// blank.
pub fn build_query(
    raw: &str,
    fields: &SearchFields<'_>,
    operator: &str,
) -> Result<String, QueryError> {
    let raw = raw.trim();
    if !raw.is_empty() {
        return Ok(raw.to_string());
    }

    let tagged = [
        ("ti:", fields.title, true),
        ("au:", fields.author, true),
        ("abs:", fields.r#abstract, true),
        // Category names (cs.AI, math.CO) never need quoting.
        ("cat:", fields.category, false),
        ("jr:", fields.journal_ref, true),
        ("rn:", fields.report_number, true),
    ];

    let mut parts = Vec::new();
    for (tag, value, quote) in tagged {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if quote {
            parts.push(format!("{tag}{}", format_field_value(value)));
        } else {
            parts.push(format!("{tag}{value}"));
        }
    }

    if parts.is_empty() {
        return Err(QueryError::Empty);
    }

    Ok(parts.join(&format!(" {operator} ")))
}

/// Quote a field value for exact-phrase matching when it needs it.
fn format_field_value(value: &str) -> String {
    let value = value.trim();

    // Already wrapped in a matching pair of quotes: keep as-is.
    if value.len() > 2 && value.starts_with('"') && value.ends_with('"') {
        return value.to_string();
    }

    if QUOTE_TRIGGERS.iter().any(|t| value.contains(t)) {
        return format!("\"{value}\"");
    }

    // Reserved words need quoting even as single tokens.
    if matches!(value.to_uppercase().as_str(), "AND" | "OR" | "NOT") {
        return format!("\"{value}\"");
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_query_takes_precedence() {
        let fields = SearchFields { title: "bar", ..SearchFields::default() };
        let query = build_query("ti:foo", &fields, "AND").unwrap();
        assert_eq!(query, "ti:foo");
    }

    #[test]
    fn test_raw_query_trimmed() {
        let query = build_query("  all:electron  ", &SearchFields::default(), "AND").unwrap();
        assert_eq!(query, "all:electron");
    }

    #[test]
    fn test_all_empty_fails() {
        let err = build_query("", &SearchFields::default(), "AND").unwrap_err();
        assert_eq!(err, QueryError::Empty);
    }

    #[test]
    fn test_whitespace_only_fails() {
        let fields = SearchFields { title: "   ", ..SearchFields::default() };
        assert_eq!(build_query("   ", &fields, "AND").unwrap_err(), QueryError::Empty);
    }

    #[test]
    fn test_fields_joined_in_fixed_order() {
        let fields = SearchFields {
            title: "attention",
            author: "Vaswani",
            category: "cs.AI",
            ..SearchFields::default()
        };
        let query = build_query("", &fields, "AND").unwrap();
        assert_eq!(query, "ti:attention AND au:Vaswani AND cat:cs.AI");
    }

    #[test]
    fn test_or_operator() {
        let fields =
            SearchFields { title: "qubit", author: "Shor", ..SearchFields::default() };
        let query = build_query("", &fields, "OR").unwrap();
        assert_eq!(query, "ti:qubit OR au:Shor");
    }

    #[test]
    fn test_phrase_gets_quoted() {
        let fields = SearchFields { title: "quantum computing", ..SearchFields::default() };
        let query = build_query("", &fields, "AND").unwrap();
        assert_eq!(query, "ti:\"quantum computing\"");
    }

    #[test]
    fn test_and_substring_gets_quoted() {
        assert_eq!(format_field_value("A AND B"), "\"A AND B\"");
        assert_eq!(format_field_value("RANDOM"), "\"RANDOM\"");
    }

    #[test]
    fn test_reserved_word_gets_quoted() {
        assert_eq!(format_field_value("or"), "\"or\"");
        assert_eq!(format_field_value("Not"), "\"Not\"");
    }

    #[test]
    fn test_already_quoted_kept_as_is() {
        assert_eq!(format_field_value("\"quantum computing\""), "\"quantum computing\"");
    }

    #[test]
    fn test_special_characters_quoted() {
        assert_eq!(format_field_value("spin-orbit"), "\"spin-orbit\"");
        assert_eq!(format_field_value("f(x)"), "\"f(x)\"");
    }

    #[test]
    fn test_category_never_quoted() {
        let fields = SearchFields { category: "astro-ph.GA", ..SearchFields::default() };
        let query = build_query("", &fields, "AND").unwrap();
        assert_eq!(query, "cat:astro-ph.GA");
    }

    #[test]
    fn test_plain_word_unquoted() {
        assert_eq!(format_field_value("electron"), "electron");
    }
}
