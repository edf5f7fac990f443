//! Tool definitions organized by domain.
//!
//! Every tool maps onto exactly one Shopify operation (or one composite
//! operation for `add_products_to_collection` and `duplicate_collection`).
//!
//! - 11 read operations
//! - 7 write operations

mod executor;
pub mod params;

pub use executor::ToolExecutor;

use schemars::JsonSchema;
use serde::Serialize;
use shopify_admin_mcp_core::PeriodError;
use thiserror::Error;

use crate::shopify::ShopifyError;
use params::{
    AddProductsParams, CreateArticleParams, CreateCollectionParams, DuplicateCollectionParams,
    GetArticlesParams, GetBlogsParams, GetCollectionParams, GetCollectionsParams, GetMenusParams,
    GetProductParams, MonthlyRankingParams, NoParams, SearchProductsParams, ThemeAssetParams,
    UpdateArticleParams, UpdateMenuParams, UpdateThemeAssetParams,
};

/// Errors raised while dispatching a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error(transparent)]
    Period(#[from] PeriodError),

    #[error(transparent)]
    Shopify(#[from] ShopifyError),

    #[error("Failed to serialize: {0}")]
    Serialize(String),
}

/// A tool definition exposed over MCP.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: serde_json::Value,
    /// Domain the tool belongs to.
    #[serde(skip)]
    pub domain: Option<String>,
    /// Whether the tool only reads store data.
    #[serde(skip)]
    pub read_only: bool,
}

impl Tool {
    fn new<P: JsonSchema>(name: &str, description: &str, domain: &str, read_only: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: serde_json::Value::from(schemars::schema_for!(P)),
            domain: Some(domain.to_string()),
            read_only,
        }
    }
}

/// Get all tools.
#[must_use]
pub fn all_tools() -> Vec<Tool> {
    let mut tools = Vec::with_capacity(18);
    tools.extend(store_tools());
    tools.extend(order_tools());
    tools.extend(collection_tools());
    tools.extend(blog_tools());
    tools.extend(theme_tools());
    tools.extend(menu_tools());
    tools.extend(product_tools());
    tools
}

/// Get a tool by name.
#[must_use]
pub fn get_tool_by_name(name: &str) -> Option<Tool> {
    all_tools().into_iter().find(|t| t.name == name)
}

/// Get all tools for a specific domain.
#[must_use]
pub fn get_tools_by_domain(domain: &str) -> Vec<Tool> {
    all_tools()
        .into_iter()
        .filter(|t| t.domain.as_deref() == Some(domain))
        .collect()
}

fn store_tools() -> Vec<Tool> {
    vec![Tool::new::<NoParams>(
        "test_connection",
        "Test the Shopify API connection and return shop name, email, domain and plan.",
        "store",
        true,
    )]
}

fn order_tools() -> Vec<Tool> {
    vec![Tool::new::<MonthlyRankingParams>(
        "get_monthly_ranking",
        "Rank products by units sold in paid orders created during a calendar month.",
        "orders",
        true,
    )]
}

fn collection_tools() -> Vec<Tool> {
    vec![
        Tool::new::<GetCollectionsParams>(
            "get_collections",
            "List collections with product counts, optionally filtered by a search query.",
            "collections",
            true,
        ),
        Tool::new::<GetCollectionParams>(
            "get_collection",
            "Get a collection by ID or handle with its products. Set include_all_products \
             to follow every page. Returns null if the collection does not exist.",
            "collections",
            true,
        ),
        Tool::new::<CreateCollectionParams>(
            "create_collection",
            "Create a collection. Returns its ID, handle and admin URL.",
            "collections",
            false,
        ),
        Tool::new::<AddProductsParams>(
            "add_products_to_collection",
            "Add products to a collection and move them to positions matching the given order. \
             A failed reorder is reported as a warning.",
            "collections",
            false,
        ),
        Tool::new::<DuplicateCollectionParams>(
            "duplicate_collection",
            "Copy a collection's description and full product list, in order, into a new \
             manually sorted collection. Not transactional: a failure after creation leaves \
             the new collection in place.",
            "collections",
            false,
        ),
    ]
}

fn blog_tools() -> Vec<Tool> {
    vec![
        Tool::new::<GetBlogsParams>("get_blogs", "List blogs.", "blogs", true),
        Tool::new::<GetArticlesParams>(
            "get_articles",
            "List articles, optionally limited to one blog and filtered by a search query.",
            "blogs",
            true,
        ),
        Tool::new::<CreateArticleParams>(
            "create_article",
            "Create a blog article. Returns its ID, handle and admin URL.",
            "blogs",
            false,
        ),
        Tool::new::<UpdateArticleParams>(
            "update_article",
            "Update an article. Only the provided fields change.",
            "blogs",
            false,
        ),
    ]
}

fn theme_tools() -> Vec<Tool> {
    vec![
        Tool::new::<NoParams>(
            "get_themes",
            "List themes with their roles (main, unpublished, demo, development).",
            "themes",
            true,
        ),
        Tool::new::<ThemeAssetParams>(
            "get_theme_asset",
            "Read one theme asset by key.",
            "themes",
            true,
        ),
        Tool::new::<UpdateThemeAssetParams>(
            "update_theme_asset",
            "Create or replace a theme asset's contents.",
            "themes",
            false,
        ),
    ]
}

fn menu_tools() -> Vec<Tool> {
    vec![
        Tool::new::<GetMenusParams>(
            "get_menus",
            "List navigation menus with two levels of items.",
            "menus",
            true,
        ),
        Tool::new::<UpdateMenuParams>(
            "update_menu",
            "Replace a menu's title and item tree.",
            "menus",
            false,
        ),
    ]
}

fn product_tools() -> Vec<Tool> {
    vec![
        Tool::new::<GetProductParams>(
            "get_product",
            "Get a product by ID or handle with variants, images and SEO fields. \
             Returns null if the product does not exist.",
            "products",
            true,
        ),
        Tool::new::<SearchProductsParams>(
            "search_products",
            "Search products with Shopify's product query syntax.",
            "products",
            true,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_tool_count_and_unique_names() {
        let tools = all_tools();
        assert_eq!(tools.len(), 18);

        let names: HashSet<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn test_read_write_split() {
        let tools = all_tools();
        assert_eq!(tools.iter().filter(|t| t.read_only).count(), 11);
        assert!(!get_tool_by_name("duplicate_collection").unwrap().read_only);
        assert!(get_tool_by_name("get_themes").unwrap().read_only);
    }

    #[test]
    fn test_schemas_are_objects() {
        for tool in all_tools() {
            assert_eq!(
                tool.input_schema["type"], "object",
                "{} schema is not an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_schema_marks_required_fields() {
        let tool = get_tool_by_name("add_products_to_collection").unwrap();
        let required = tool.input_schema["required"].as_array().unwrap();
        assert!(required.iter().any(|r| r == "collection_id"));
        assert!(required.iter().any(|r| r == "product_ids"));
    }

    #[test]
    fn test_tools_by_domain() {
        let names: Vec<_> = get_tools_by_domain("collections")
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(
            names,
            [
                "get_collections",
                "get_collection",
                "create_collection",
                "add_products_to_collection",
                "duplicate_collection"
            ]
        );
        assert!(get_tools_by_domain("customers").is_empty());
    }

    #[test]
    fn test_unknown_tool() {
        assert!(get_tool_by_name("delete_everything").is_none());
    }
}
