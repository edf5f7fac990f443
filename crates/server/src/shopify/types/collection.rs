//! Collection types.

use serde::{Deserialize, Serialize};

use super::{Connection, Count};

/// Collection summary as returned by list queries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub products_count: i64,
    pub updated_at: String,
}

/// Result of `get_collections`.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionList {
    pub collections: Vec<CollectionSummary>,
}

/// Product entry inside a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionProduct {
    pub id: String,
    pub title: String,
    pub handle: String,
}

/// Collection header fields plus one page of products (wire shape).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub products_count: Count,
    pub products: Connection<CollectionProduct>,
}

/// Collection header fields (everything except the product list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionHeader {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description_html: String,
    pub products_count: i64,
}

/// A collection with the products fetched for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDetail {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description_html: String,
    /// Total reported by Shopify, independent of how many products were fetched.
    pub products_count: i64,
    pub products: Vec<CollectionProduct>,
}

impl CollectionDetail {
    #[must_use]
    pub fn new(header: CollectionHeader, products: Vec<CollectionProduct>) -> Self {
        Self {
            id: header.id,
            title: header.title,
            handle: header.handle,
            description_html: header.description_html,
            products_count: header.products_count,
            products,
        }
    }
}

/// Input for creating a collection.
#[derive(Debug, Clone, Default)]
pub struct NewCollection {
    pub title: String,
    pub handle: Option<String>,
    pub description_html: Option<String>,
    pub sort_order: shopify_admin_mcp_core::CollectionSortOrder,
}

/// A freshly created collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedCollection {
    pub collection_id: String,
    pub handle: String,
    pub admin_url: String,
}

/// Position change for `collectionReorderProducts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMove {
    pub id: String,
    /// Zero-based target position, sent as a decimal string (`UnsignedInt64`).
    pub new_position: String,
}
