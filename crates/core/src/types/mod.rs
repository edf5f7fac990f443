//! Core types for the Shopify Admin MCP server.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod period;
pub mod status;

pub use id::legacy_resource_id;
pub use period::{MonthWindow, PeriodError};
pub use status::*;
