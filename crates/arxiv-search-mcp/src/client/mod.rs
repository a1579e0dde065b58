//! arXiv API client.
//!
//! One GET per search: the status check happens before the body is read,
//! and the Atom body is parsed and normalized before the result is
//! returned. There is no retry, caching, or rate limiting; a timeout
//! resolves to an error rather than hanging the call.

mod normalize;

pub use normalize::{paper_from_entry, search_result_from_feed};

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::feed;
use crate::models::{SearchResult, SortBy, SortOrder};

/// arXiv API client.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    /// HTTP client with default headers and timeouts.
    client: Client,

    /// Query API endpoint.
    api_url: String,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(api::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(api::ACCEPT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client, api_url: config.api_url })
    }

    /// Search for papers.
    ///
    /// # Errors
    ///
    /// [`ClientError::Http`] on transport failure, [`ClientError::Status`]
    /// on a non-success response, [`ClientError::Parse`] when the body is
    /// not the expected Atom shape.
    pub async fn search_papers(
        &self,
        query: &str,
        start: u32,
        max_results: u32,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> ClientResult<SearchResult> {
        let params = [
            ("search_query", query.to_string()),
            ("start", start.to_string()),
            ("sortBy", sort_by.as_str().to_string()),
            ("sortOrder", sort_order.as_str().to_string()),
            ("max_results", max_results.to_string()),
        ];

        tracing::debug!(query, start, max_results, "requesting arXiv feed");

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed = feed::parse(&body)?;
        let result = search_result_from_feed(parsed)?;

        tracing::debug!(
            count = result.count,
            total = result.feed_info.total_results,
            "normalized feed"
        );

        Ok(result)
    }
}
