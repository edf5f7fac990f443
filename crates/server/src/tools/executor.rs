//! Tool dispatch onto `AdminClient` operations.

use serde::{Serialize, de::DeserializeOwned};
use shopify_admin_mcp_core::MonthWindow;
use tracing::instrument;

use super::ToolError;
use super::params::{
    AddProductsParams, CreateArticleParams, CreateCollectionParams, DuplicateCollectionParams,
    GetArticlesParams, GetBlogsParams, GetCollectionParams, GetCollectionsParams, GetMenusParams,
    GetProductParams, MonthlyRankingParams, SearchProductsParams, ThemeAssetParams,
    UpdateArticleParams, UpdateMenuParams, UpdateThemeAssetParams,
};
use crate::orchestration::{DuplicateRequest, duplicate_collection, link_and_order};
use crate::pagination::FetchMode;
use crate::shopify::{
    AdminClient, ArticleChanges, CollectionLookup, NewArticle, NewCollection, ProductLookup,
    ShopifyError,
};

/// Executor for Shopify tools.
///
/// Decodes the tool's arguments, performs exactly one operation and returns
/// the result as pretty-printed JSON.
pub struct ToolExecutor<'a> {
    shopify: &'a AdminClient,
}

impl<'a> ToolExecutor<'a> {
    /// Create a new tool executor.
    #[must_use]
    pub const fn new(shopify: &'a AdminClient) -> Self {
        Self { shopify }
    }

    /// Execute a tool and return the result as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::UnknownTool` for an unrecognized name,
    /// `ToolError::InvalidArguments` if `input` does not match the tool's
    /// schema, and otherwise whatever the underlying operation fails with.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub async fn execute(&self, name: &str, input: &serde_json::Value) -> Result<String, ToolError> {
        match name {
            "test_connection" => self.test_connection().await,
            "get_monthly_ranking" => self.get_monthly_ranking(input).await,
            "get_collections" => self.get_collections(input).await,
            "get_collection" => self.get_collection(input).await,
            "create_collection" => self.create_collection(input).await,
            "add_products_to_collection" => self.add_products_to_collection(input).await,
            "duplicate_collection" => self.duplicate_collection(input).await,
            "get_blogs" => self.get_blogs(input).await,
            "get_articles" => self.get_articles(input).await,
            "create_article" => self.create_article(input).await,
            "update_article" => self.update_article(input).await,
            "get_themes" => self.get_themes().await,
            "get_theme_asset" => self.get_theme_asset(input).await,
            "update_theme_asset" => self.update_theme_asset(input).await,
            "get_menus" => self.get_menus(input).await,
            "update_menu" => self.update_menu(input).await,
            "get_product" => self.get_product(input).await,
            "search_products" => self.search_products(input).await,
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }

    // =========================================================================
    // Store & orders
    // =========================================================================

    async fn test_connection(&self) -> Result<String, ToolError> {
        to_json(&self.shopify.test_connection().await?)
    }

    async fn get_monthly_ranking(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: MonthlyRankingParams = decode(input)?;
        let window = MonthWindow::new(params.year, params.month)?;
        to_json(&self.shopify.monthly_ranking(window, params.limit).await?)
    }

    // =========================================================================
    // Collections
    // =========================================================================

    async fn get_collections(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: GetCollectionsParams = decode(input)?;
        let collections = self
            .shopify
            .get_collections(params.first, params.query.as_deref())
            .await?;
        to_json(&collections)
    }

    async fn get_collection(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: GetCollectionParams = decode(input)?;
        let lookup = match (
            params.id.filter(|i| !i.is_empty()),
            params.handle.filter(|h| !h.is_empty()),
        ) {
            (Some(id), _) => CollectionLookup::Id(id),
            (None, Some(handle)) => CollectionLookup::Handle(handle),
            (None, None) => {
                return Err(ShopifyError::InvalidInput("Either id or handle is required".into()).into());
            }
        };

        let collection = self
            .shopify
            .get_collection(
                &lookup,
                FetchMode::from_fetch_all(params.include_all_products),
                params.products_first,
            )
            .await?;
        to_json(&collection)
    }

    async fn create_collection(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: CreateCollectionParams = decode(input)?;
        let created = self
            .shopify
            .create_collection(&NewCollection {
                title: params.title,
                handle: params.handle,
                description_html: params.description_html,
                sort_order: params.sort_order,
            })
            .await?;
        to_json(&created)
    }

    async fn add_products_to_collection(
        &self,
        input: &serde_json::Value,
    ) -> Result<String, ToolError> {
        let params: AddProductsParams = decode(input)?;
        let outcome = link_and_order(self.shopify, &params.collection_id, &params.product_ids).await?;
        to_json(&outcome)
    }

    async fn duplicate_collection(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: DuplicateCollectionParams = decode(input)?;
        let request = DuplicateRequest {
            source_collection_id: params.source_collection_id,
            new_title: params.new_title,
            new_handle: params.new_handle,
        };
        to_json(&duplicate_collection(self.shopify, &request).await?)
    }

    // =========================================================================
    // Blogs
    // =========================================================================

    async fn get_blogs(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: GetBlogsParams = decode(input)?;
        to_json(&self.shopify.get_blogs(params.first).await?)
    }

    async fn get_articles(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: GetArticlesParams = decode(input)?;
        let articles = self
            .shopify
            .get_articles(
                params.blog_id.as_deref(),
                params.first,
                params.query.as_deref(),
            )
            .await?;
        to_json(&articles)
    }

    async fn create_article(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: CreateArticleParams = decode(input)?;
        let created = self
            .shopify
            .create_article(&NewArticle {
                blog_id: params.blog_id,
                title: params.title,
                body_html: params.content_html,
                handle: params.handle,
                author: params.author,
                tags: params.tags,
                published: params.published,
                published_at: params.published_at,
            })
            .await?;
        to_json(&created)
    }

    async fn update_article(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: UpdateArticleParams = decode(input)?;
        let changes = ArticleChanges {
            title: params.title,
            body_html: params.content_html,
            author: params.author,
            tags: params.tags,
            published: params.published,
            published_at: params.published_at,
        };
        to_json(&self.shopify.update_article(&params.id, &changes).await?)
    }

    // =========================================================================
    // Themes
    // =========================================================================

    async fn get_themes(&self) -> Result<String, ToolError> {
        to_json(&self.shopify.get_themes().await?)
    }

    async fn get_theme_asset(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: ThemeAssetParams = decode(input)?;
        to_json(
            &self
                .shopify
                .get_theme_asset(params.theme_id, &params.key)
                .await?,
        )
    }

    async fn update_theme_asset(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: UpdateThemeAssetParams = decode(input)?;
        let asset = self
            .shopify
            .update_theme_asset(params.theme_id, &params.key, &params.value)
            .await?;
        to_json(&asset)
    }

    // =========================================================================
    // Menus & products
    // =========================================================================

    async fn get_menus(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: GetMenusParams = decode(input)?;
        to_json(&self.shopify.get_menus(params.first).await?)
    }

    async fn update_menu(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: UpdateMenuParams = decode(input)?;
        let menu = self
            .shopify
            .update_menu(&params.id, &params.title, &params.items)
            .await?;
        to_json(&menu)
    }

    async fn get_product(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: GetProductParams = decode(input)?;
        let lookup = ProductLookup::from_parts(params.id, params.handle)?;
        to_json(&self.shopify.get_product(&lookup).await?)
    }

    async fn search_products(&self, input: &serde_json::Value) -> Result<String, ToolError> {
        let params: SearchProductsParams = decode(input)?;
        let results = self
            .shopify
            .search_products(params.query.as_deref(), params.first)
            .await?;
        to_json(&results)
    }
}

/// Decode tool arguments. A missing (`null`) input is treated as `{}`.
fn decode<T: DeserializeOwned>(input: &serde_json::Value) -> Result<T, ToolError> {
    if input.is_null() {
        return Ok(serde_json::from_value(serde_json::json!({}))?);
    }
    Ok(serde_json::from_value(input.clone())?)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::Serialize(e.to_string()))
}
