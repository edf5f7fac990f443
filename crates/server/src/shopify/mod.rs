//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the high-privilege Shopify Admin API token.** The
//! token is only ever attached as the `X-Shopify-Access-Token` header and is
//! redacted from `Debug` output.
//!
//! # Architecture
//!
//! - Raw GraphQL documents in [`admin::queries`], variables built with `serde_json`
//! - REST calls for theme assets (no GraphQL equivalent in 2024-10)
//! - Direct API calls to Shopify, one request per call, no caching or retry
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin_mcp::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! let shop = client.test_connection().await?;
//! let lookup = CollectionLookup::Id("gid://shopify/Collection/1".to_string());
//! let collection = client.get_collection(&lookup, FetchMode::All, 50).await?;
//! ```

mod admin;
pub mod types;

pub use admin::{
    ACCESS_TOKEN_HEADER, AdminClient, CollectionLookup, DEFAULT_PRODUCTS_PAGE_SIZE,
    DEFAULT_RANKING_LIMIT, ProductLookup, article_search, paid_orders_filter, queries,
};
pub use types::*;

use std::fmt;

use thiserror::Error;

/// Which upstream surface a failed call targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    GraphQL,
    Rest,
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphQL => f.write_str("Shopify API"),
            Self::Rest => f.write_str("Shopify REST API"),
        }
    }
}

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// Missing or invalid connection parameters.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("{api} error: {status} - {body}")]
    Status {
        api: Api,
        status: u16,
        body: String,
    },

    /// GraphQL response carried one or more errors.
    #[error("GraphQL error: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Mutation returned `userErrors`.
    #[error("{0}")]
    UserError(String),

    /// Successful response without a `data` payload.
    #[error("No data in response")]
    NoData,

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Successful payload missing the entity the operation should produce.
    #[error("{0}")]
    MissingPayload(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Caller-supplied arguments rejected before any network call.
    #[error("{0}")]
    InvalidInput(String),
}

/// Coarse classification of [`ShopifyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    UpstreamProtocol,
    UpstreamContract,
    NotFound,
    InvalidInput,
}

impl ShopifyError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Http(_) | Self::Status { .. } | Self::GraphQL(_) | Self::UserError(_) => {
                ErrorKind::UpstreamProtocol
            }
            Self::NoData | Self::Parse(_) | Self::MissingPayload(_) => ErrorKind::UpstreamContract,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// Build a `UserError` from a mutation's `userErrors`, prefixed with the
    /// operation that failed.
    pub(crate) fn user_errors(operation: &str, errors: &[UserError]) -> Self {
        let messages = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UserError(format!("{operation} failed: {messages}"))
    }
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    #[serde(default)]
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
