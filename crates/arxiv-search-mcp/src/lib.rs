//! arXiv Search MCP Server
//!
//! A Model Context Protocol (MCP) server for the arXiv query API. Exposes a
//! single `paper_search` tool that accepts either a raw arXiv query string or
//! structured search fields, fetches one page of the Atom feed, and renders a
//! plain-text summary.
//!
//! # Features
//!
//! - **Structured or raw queries**: field tags (`ti:`, `au:`, `abs:`, `cat:`,
//!   `jr:`, `rn:`) with phrase quoting applied per field
//! - **Async-first**: built on Tokio and reqwest, one request per call
//! - **Typed errors**: every failure path becomes a plain `Error: ...` string
//!   at the tool boundary
//!
//! # Example
//!
//! ```no_run
//! use arxiv_search_mcp::{client::ArxivClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::default())?;
//!
//!     // Use client for API calls
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod formatters;
pub mod models;
pub mod query;
pub mod server;
pub mod tools;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, FeedError, QueryError, ToolError};
