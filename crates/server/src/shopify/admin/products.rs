//! Product read operations for the Admin API.

use serde::Deserialize;
use tracing::instrument;

use super::{AdminClient, queries};
use crate::shopify::{
    Connection, ProductDetail, ProductNode, ProductSearch, ProductSummary, ShopifyError,
};

/// How to find a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    Id(String),
    Handle(String),
}

impl ProductLookup {
    /// Prefer `id` when both are given.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::InvalidInput` if neither is given.
    pub fn from_parts(id: Option<String>, handle: Option<String>) -> Result<Self, ShopifyError> {
        match (
            id.filter(|i| !i.is_empty()),
            handle.filter(|h| !h.is_empty()),
        ) {
            (Some(id), _) => Ok(Self::Id(id)),
            (None, Some(handle)) => Ok(Self::Handle(handle)),
            (None, None) => Err(ShopifyError::InvalidInput(
                "Either id or handle is required".into(),
            )),
        }
    }
}

impl AdminClient {
    /// Get a product with variants, images and SEO fields.
    ///
    /// Returns `None` if no product matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_product(
        &self,
        lookup: &ProductLookup,
    ) -> Result<Option<ProductDetail>, ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            #[serde(alias = "productByHandle")]
            product: Option<ProductNode>,
        }

        let data: Data = match lookup {
            ProductLookup::Id(id) => {
                self.query(&queries::product_by_id(), serde_json::json!({ "id": id }))
                    .await?
            }
            ProductLookup::Handle(handle) => {
                self.query(
                    &queries::product_by_handle(),
                    serde_json::json!({ "handle": handle }),
                )
                .await?
            }
        };

        Ok(data.product.map(ProductDetail::from))
    }

    /// Search products with Shopify's product query syntax.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn search_products(
        &self,
        query: Option<&str>,
        first: i64,
    ) -> Result<ProductSearch, ShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            products: Connection<ProductSummary>,
        }

        let data: Data = self
            .query(
                queries::SEARCH_PRODUCTS,
                serde_json::json!({ "query": query, "first": first }),
            )
            .await?;

        let has_next_page = data.products.page_info.has_next_page;
        Ok(ProductSearch {
            products: data.products.into_nodes(),
            has_next_page,
        })
    }
}
