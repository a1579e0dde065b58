//! The `paper_search` tool: query construction, one API call, text output.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::config::limits;
use crate::error::ToolResult;
use crate::formatters;
use crate::models::PaperSearchInput;
use crate::query::{self, SearchFields};

/// arXiv paper search tool.
pub struct PaperSearchTool;

#[async_trait::async_trait]
impl McpTool for PaperSearchTool {
    fn name(&self) -> &'static str {
        "paper_search"
    }

    fn description(&self) -> &'static str {
        "Searches arXiv using its public API. Two modes: provide specific field \
         parameters (title, author, abstract, category, journal_ref, report_number) \
         for a structured search, or a complete arXiv query string via 'query'. \
         Field prefixes for raw queries: ti: (title), au: (author), abs: (abstract), \
         cat: (category), jr: (journal reference), rn: (report number). \
         Examples: structured title=\"attention\" category=\"cs.AI\"; \
         raw query=\"ti:attention AND cat:cs.AI\"."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Raw arXiv query string (takes precedence if provided)"
                },
                "title": {
                    "type": "string",
                    "description": "Search in paper titles"
                },
                "author": {
                    "type": "string",
                    "description": "Search for a specific author"
                },
                "abstract": {
                    "type": "string",
                    "description": "Search in paper abstracts"
                },
                "category": {
                    "type": "string",
                    "description": "arXiv category (e.g. cs.AI, math.CO)"
                },
                "journal_ref": {
                    "type": "string",
                    "description": "Journal reference"
                },
                "report_number": {
                    "type": "string",
                    "description": "Report number"
                },
                "operator": {
                    "type": "string",
                    "enum": ["AND", "OR"],
                    "default": "AND",
                    "description": "Boolean operator joining structured fields"
                },
                "sort_by": {
                    "type": "string",
                    "enum": ["relevance", "lastUpdatedDate", "submittedDate"],
                    "default": "relevance",
                    "description": "Sort criteria"
                },
                "sort_order": {
                    "type": "string",
                    "enum": ["ascending", "descending"],
                    "default": "descending",
                    "description": "Sort order"
                },
                "start": {
                    "type": "integer",
                    "default": 0,
                    "description": "Starting index for pagination"
                },
                "max_results": {
                    "type": "integer",
                    "default": limits::DEFAULT_MAX_RESULTS,
                    "description": "Maximum number of results (1-30)"
                }
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        // Every failure becomes a plain string result; nothing structured
        // crosses the tool boundary.
        Ok(run_search(ctx, input).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "paper_search failed");
            e.to_user_message()
        }))
    }
}

async fn run_search(ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
    let params: PaperSearchInput = serde_json::from_value(input)?;

    let fields = SearchFields {
        title: &params.title,
        author: &params.author,
        r#abstract: &params.r#abstract,
        category: &params.category,
        journal_ref: &params.journal_ref,
        report_number: &params.report_number,
    };

    let search_query = query::build_query(&params.query, &fields, &params.operator)?;
    tracing::info!(query = %search_query, "executing search");

    let max_results = if params.max_results > limits::MAX_RESULTS_CAP {
        tracing::warn!(requested = params.max_results, "max_results capped at 30");
        limits::MAX_RESULTS_CAP
    } else {
        params.max_results
    };

    let result = ctx
        .client
        .search_papers(&search_query, params.start, max_results, params.sort_by, params.sort_order)
        .await?;

    if result.count == 0 {
        tracing::info!("no papers found for query");
        return Ok(formatters::NO_RESULTS.to_string());
    }

    tracing::info!(count = result.count, "retrieved papers");
    Ok(formatters::format_search_response(&result, params.start, max_results))
}
