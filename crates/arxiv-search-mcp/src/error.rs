//! Error types for the arXiv search MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Lower layers convert failures into typed values; the
//! tool layer turns them into user-facing strings via
//! [`ToolError::to_user_message`].

/// Errors from query construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Neither a raw query nor any structured field was provided.
    #[error("Must provide either 'query' or at least one search field")]
    Empty,
}

/// Errors from Atom feed parsing and normalization.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    /// The body was not well-formed XML.
    #[error("invalid Atom XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An OpenSearch counter was present but not an integer.
    #[error("invalid integer in {field}: {value:?}")]
    InvalidNumber {
        /// Element the counter came from.
        field: &'static str,
        /// Text content that failed to parse.
        value: String,
    },
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status, checked before the body is read.
    #[error("Request failed: HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The feed body did not match the expected Atom shape.
    #[error("Parsing failed: {0}")]
    Parse(#[from] FeedError),
}

impl ClientError {
    /// Create a non-success status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::Status { status }
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// No usable query could be constructed from the input.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Error from the API client.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Input did not match the tool schema.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal tool logic error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Convert to the user-facing string returned through the tool surface.
    ///
    /// Every failure path yields a plain `Error: `-prefixed string; nothing
    /// structured crosses the tool boundary.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Query(e) => format!("Error: {e}"),
            Self::Client(e) => format!("Error: {e}"),
            Self::Serialization(_) | Self::Internal(_) => {
                "Error: An unexpected error occurred while searching papers.".to_string()
            }
        }
    }
}

/// Result type alias for feed parsing.
pub type FeedResult<T> = Result<T, FeedError>;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
