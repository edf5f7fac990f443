//! Shopify global IDs.
//!
//! The Admin GraphQL API identifies every resource with a global ID of the
//! form `gid://shopify/<Resource>/<id>`. Admin web URLs and search filters
//! use the trailing numeric ("legacy") ID instead.

/// Extract the legacy ID from a global ID.
///
/// Accepts bare legacy IDs too, so `"123"` and `"gid://shopify/Blog/123"`
/// both yield `"123"`.
#[must_use]
pub fn legacy_resource_id(id: &str) -> &str {
    let path = id.split_once('?').map_or(id, |(path, _)| path);
    path.rsplit('/').next().unwrap_or(path)
}
