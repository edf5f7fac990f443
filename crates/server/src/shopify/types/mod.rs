//! Domain types for the Shopify Admin API.
//!
//! Wire shapes deserialize from the GraphQL/REST payloads (camelCase for
//! GraphQL, snake_case for REST). Result types are what the tools return.

pub mod blog;
pub mod collection;
pub mod common;
pub mod menu;
pub mod order;
pub mod product;
pub mod shop;
pub mod theme;

// Re-export all types for convenience
pub use blog::*;
pub use collection::*;
pub use common::*;
pub use menu::*;
pub use order::*;
pub use product::*;
pub use shop::*;
pub use theme::*;
