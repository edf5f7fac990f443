//! Shopify Admin MCP server library.
//!
//! Exposes a fixed set of Shopify Admin operations as MCP tools over stdio.
//!
//! # Architecture
//!
//! - [`shopify`] - Admin API transport (GraphQL + REST) and per-domain operations
//! - [`pagination`] - Cursor-driven page walks (first page or all pages)
//! - [`aggregate`] - Folding page items into lists or keyed totals
//! - [`orchestration`] - Multi-step collection operations with per-step policies
//! - [`tools`] - Tool table, argument schemas and dispatch
//! - [`server`] - `rmcp` handler wiring the tools to the protocol
//!
//! The upstream is stateless from this crate's point of view: nothing is
//! cached between calls and every call issues fresh requests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod config;
pub mod orchestration;
pub mod pagination;
pub mod server;
pub mod shopify;
pub mod tools;

pub use config::{ConfigError, McpConfig, ShopifyConfig};
pub use server::ShopifyMcpServer;
pub use shopify::{AdminClient, ShopifyError};
