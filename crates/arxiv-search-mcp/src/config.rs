//! Configuration for the arXiv search MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the arXiv query API.
    pub const BASE_URL: &str = "http://export.arxiv.org/api/query";

    /// User-Agent sent with every request.
    pub const USER_AGENT: &str = "ArxivMCPClient/1.0";

    /// Accept header; arXiv answers with Atom XML.
    pub const ACCEPT: &str = "application/atom+xml";

    /// Whole-request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Result-window limits for the `paper_search` tool.
pub mod limits {
    /// Default number of results per call.
    pub const DEFAULT_MAX_RESULTS: u32 = 10;

    /// Hard cap per call; larger requests are clamped, not rejected.
    pub const MAX_RESULTS_CAP: u32 = 30;
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv query API endpoint.
    pub api_url: String,

    /// Whole-request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{base_url}/api/query"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
