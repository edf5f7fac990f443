//! Typed tool arguments.
//!
//! Each struct doubles as the tool's JSON schema (via `schemars`) and as the
//! decoding target for incoming arguments. Field docs become schema
//! descriptions.

use schemars::JsonSchema;
use serde::Deserialize;
use shopify_admin_mcp_core::CollectionSortOrder;

use crate::shopify::{DEFAULT_PRODUCTS_PAGE_SIZE, DEFAULT_RANKING_LIMIT, MenuItemInput};

const fn default_ranking_limit() -> usize {
    DEFAULT_RANKING_LIMIT
}

const fn default_products_first() -> i64 {
    DEFAULT_PRODUCTS_PAGE_SIZE
}

const fn default_twenty() -> i64 {
    20
}

const fn default_ten() -> i64 {
    10
}

/// Tools that take no arguments.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

// =============================================================================
// Orders
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MonthlyRankingParams {
    /// Calendar year, e.g. 2025
    pub year: i32,
    /// Month number, 1-12
    pub month: u32,
    /// Number of products to return (default 15)
    #[serde(default = "default_ranking_limit")]
    pub limit: usize,
}

// =============================================================================
// Collections
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCollectionsParams {
    /// Number of collections to return (default 20)
    #[serde(default = "default_twenty")]
    pub first: i64,
    /// Shopify search query, e.g. `title:Sale*`
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCollectionParams {
    /// Collection GID, e.g. `gid://shopify/Collection/123`
    #[serde(default)]
    pub id: Option<String>,
    /// Collection handle (used when `id` is absent)
    #[serde(default)]
    pub handle: Option<String>,
    /// Follow pagination and return every product in the collection
    #[serde(default)]
    pub include_all_products: bool,
    /// Products per page (default 50)
    #[serde(default = "default_products_first")]
    pub products_first: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCollectionParams {
    /// Collection title
    pub title: String,
    /// URL handle; generated from the title when omitted
    #[serde(default)]
    pub handle: Option<String>,
    /// Description as HTML
    #[serde(default)]
    pub description_html: Option<String>,
    /// Product sort order (default MANUAL)
    #[serde(default)]
    pub sort_order: CollectionSortOrder,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddProductsParams {
    /// Target collection GID
    pub collection_id: String,
    /// Product GIDs in the order they should appear
    pub product_ids: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DuplicateCollectionParams {
    /// GID of the collection to copy
    pub source_collection_id: String,
    /// Title of the new collection
    pub new_title: String,
    /// Handle of the new collection
    #[serde(default)]
    pub new_handle: Option<String>,
}

// =============================================================================
// Blogs
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetBlogsParams {
    /// Number of blogs to return (default 10)
    #[serde(default = "default_ten")]
    pub first: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetArticlesParams {
    /// Limit to one blog (GID)
    #[serde(default)]
    pub blog_id: Option<String>,
    /// Number of articles to return (default 10)
    #[serde(default = "default_ten")]
    pub first: i64,
    /// Shopify search query
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateArticleParams {
    /// Blog GID
    pub blog_id: String,
    pub title: String,
    /// Article body as HTML
    pub content_html: String,
    #[serde(default)]
    pub handle: Option<String>,
    /// Author name
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Publish immediately
    #[serde(default)]
    pub published: Option<bool>,
    /// ISO 8601 publish date
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateArticleParams {
    /// Article GID
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Article body as HTML
    #[serde(default)]
    pub content_html: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default)]
    pub published_at: Option<String>,
}

// =============================================================================
// Themes
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ThemeAssetParams {
    /// Numeric theme ID
    pub theme_id: i64,
    /// Asset key, e.g. `templates/index.json`
    pub key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateThemeAssetParams {
    /// Numeric theme ID
    pub theme_id: i64,
    /// Asset key, e.g. `sections/header.liquid`
    pub key: String,
    /// New asset contents
    pub value: String,
}

// =============================================================================
// Menus
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetMenusParams {
    /// Number of menus to return (default 10)
    #[serde(default = "default_ten")]
    pub first: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateMenuParams {
    /// Menu GID
    pub id: String,
    pub title: String,
    /// Complete item tree; replaces the existing items
    pub items: Vec<MenuItemInput>,
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProductParams {
    /// Product GID
    #[serde(default)]
    pub id: Option<String>,
    /// Product handle (used when `id` is absent)
    #[serde(default)]
    pub handle: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchProductsParams {
    /// Shopify product search query, e.g. `title:*soap* status:active`
    #[serde(default)]
    pub query: Option<String>,
    /// Number of products to return (default 20)
    #[serde(default = "default_twenty")]
    pub first: i64,
}
