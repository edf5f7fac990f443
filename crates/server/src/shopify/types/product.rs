//! Product types.

use serde::{Deserialize, Serialize};

use super::Connection;

/// Product variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    pub sku: Option<String>,
    /// Decimal amount as string (preserves precision).
    pub price: String,
    pub inventory_quantity: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: Option<String>,
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seo {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Full product record (wire shape, connections still wrapped).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description_html: String,
    pub status: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub online_store_url: Option<String>,
    #[serde(default)]
    pub seo: Seo,
    pub variants: Connection<ProductVariant>,
    pub images: Connection<ProductImage>,
}

/// Full product record with variants and images flattened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description_html: String,
    pub status: String,
    pub vendor: String,
    pub product_type: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
    pub online_store_url: Option<String>,
    pub seo: Seo,
    pub variants: Vec<ProductVariant>,
    pub images: Vec<ProductImage>,
}

impl From<ProductNode> for ProductDetail {
    fn from(p: ProductNode) -> Self {
        Self {
            id: p.id,
            title: p.title,
            handle: p.handle,
            description_html: p.description_html,
            status: p.status,
            vendor: p.vendor,
            product_type: p.product_type,
            tags: p.tags,
            created_at: p.created_at,
            updated_at: p.updated_at,
            online_store_url: p.online_store_url,
            seo: p.seo,
            variants: p.variants.into_nodes(),
            images: p.images.into_nodes(),
        }
    }
}

/// Product row in search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub status: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub product_type: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearch {
    pub products: Vec<ProductSummary>,
    pub has_next_page: bool,
}
