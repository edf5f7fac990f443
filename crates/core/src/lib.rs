//! Shopify Admin MCP Core - Shared types library.
//!
//! This crate provides common types used across the workspace:
//! - `server` - Shopify Admin API client and MCP tool server
//! - `cli` - Command-line tools for checking and exercising the server
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopify global IDs, calendar month windows, and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
