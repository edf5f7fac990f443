//! Collection management operations for the Admin API.

use std::fmt;

use serde::Deserialize;
use tracing::instrument;

use super::{AdminClient, queries};
use crate::aggregate::AppendAll;
use crate::orchestration::CollectionBackend;
use crate::pagination::{Cursor, FetchMode, Page, paginate};
use crate::shopify::{
    CollectionDetail, CollectionHeader, CollectionList, CollectionNode, CollectionProduct,
    CollectionSummary,
    Connection, Count, CreatedCollection, NewCollection, ProductMove, ShopifyError, UserError,
};

/// Products requested per collection page by default.
pub const DEFAULT_PRODUCTS_PAGE_SIZE: i64 = 50;

/// How to find a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionLookup {
    Id(String),
    Handle(String),
}

impl fmt::Display for CollectionLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.write_str(id),
            Self::Handle(handle) => f.write_str(handle),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionData {
    #[serde(alias = "collectionByHandle")]
    collection: Option<CollectionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MutationPayload<T> {
    collection: Option<T>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
struct CreatedNode {
    id: String,
    handle: String,
}

impl AdminClient {
    /// List collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_collections(
        &self,
        first: i64,
        query: Option<&str>,
    ) -> Result<CollectionList, ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Node {
            id: String,
            title: String,
            handle: String,
            #[serde(default)]
            products_count: Count,
            updated_at: String,
        }

        #[derive(Deserialize)]
        struct Data {
            collections: Connection<Node>,
        }

        let data: Data = self
            .query(
                queries::COLLECTIONS,
                serde_json::json!({
                    "first": first,
                    "query": query.filter(|q| !q.is_empty()),
                }),
            )
            .await?;

        let collections = data
            .collections
            .into_nodes()
            .into_iter()
            .map(|c| CollectionSummary {
                id: c.id,
                title: c.title,
                handle: c.handle,
                products_count: c.products_count.count,
                updated_at: c.updated_at,
            })
            .collect();
        Ok(CollectionList { collections })
    }

    /// Fetch a collection's header and one page of its products.
    ///
    /// Returns `None` if no collection matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn collection_page(
        &self,
        lookup: &CollectionLookup,
        products_first: i64,
        after: Option<Cursor>,
    ) -> Result<Option<Page<CollectionProduct, CollectionHeader>>, ShopifyError> {
        let data: CollectionData = match lookup {
            CollectionLookup::Id(id) => {
                self.query(
                    &queries::collection_by_id(),
                    serde_json::json!({ "id": id, "productsFirst": products_first, "after": after }),
                )
                .await?
            }
            CollectionLookup::Handle(handle) => {
                self.query(
                    &queries::collection_by_handle(),
                    serde_json::json!({ "handle": handle, "productsFirst": products_first, "after": after }),
                )
                .await?
            }
        };

        Ok(data.collection.map(|c| {
            let header = CollectionHeader {
                id: c.id,
                title: c.title,
                handle: c.handle,
                description_html: c.description_html,
                products_count: c.products_count.count,
            };
            Page::from_connection(header, c.products)
        }))
    }

    /// Get a collection with its first page of products, or all of them.
    ///
    /// Returns `None` if the collection does not exist.
    ///
    /// # Errors
    ///
    /// Returns the first failing page request; no partial list is returned.
    #[instrument(skip(self))]
    pub async fn get_collection(
        &self,
        lookup: &CollectionLookup,
        mode: FetchMode,
        products_first: i64,
    ) -> Result<Option<CollectionDetail>, ShopifyError> {
        let walk = paginate(mode, AppendAll::default(), move |after| async move {
            self.collection_page(lookup, products_first, after)
                .await?
                .ok_or_else(|| ShopifyError::NotFound(format!("Collection not found: {lookup}")))
        })
        .await;

        match walk {
            Ok((products, walk)) => Ok(Some(CollectionDetail::new(walk.header, products))),
            Err(ShopifyError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create a collection.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::UserError` if Shopify rejects the input and
    /// `ShopifyError::MissingPayload` if no collection comes back.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_collection(
        &self,
        input: &NewCollection,
    ) -> Result<CreatedCollection, ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            collection_create: MutationPayload<CreatedNode>,
        }

        let mut fields = serde_json::Map::new();
        fields.insert("title".into(), input.title.clone().into());
        fields.insert("sortOrder".into(), input.sort_order.as_str().into());
        if let Some(handle) = input.handle.as_deref().filter(|h| !h.is_empty()) {
            fields.insert("handle".into(), handle.into());
        }
        if let Some(html) = input.description_html.as_deref().filter(|h| !h.is_empty()) {
            fields.insert("descriptionHtml".into(), html.into());
        }

        let data: Data = self
            .query(
                queries::COLLECTION_CREATE,
                serde_json::json!({ "input": fields }),
            )
            .await?;

        let payload = data.collection_create;
        if !payload.user_errors.is_empty() {
            return Err(ShopifyError::user_errors(
                "Collection create",
                &payload.user_errors,
            ));
        }

        let collection = payload.collection.ok_or_else(|| {
            ShopifyError::MissingPayload("Collection create failed: no collection returned".into())
        })?;

        Ok(CreatedCollection {
            admin_url: self.admin_url("collections", &collection.id),
            collection_id: collection.id,
            handle: collection.handle,
        })
    }

    /// Add products to a collection (`collectionAddProducts`).
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::UserError` if Shopify rejects the request.
    #[instrument(skip(self, product_ids), fields(count = product_ids.len()))]
    pub async fn add_products_to_collection(
        &self,
        collection_id: &str,
        product_ids: &[String],
    ) -> Result<(), ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            collection_add_products: MutationPayload<serde_json::Value>,
        }

        let data: Data = self
            .query(
                queries::COLLECTION_ADD_PRODUCTS,
                serde_json::json!({ "id": collection_id, "productIds": product_ids }),
            )
            .await?;

        let errors = data.collection_add_products.user_errors;
        if !errors.is_empty() {
            return Err(ShopifyError::user_errors("Add products", &errors));
        }
        Ok(())
    }

    /// Move products to explicit positions (`collectionReorderProducts`).
    ///
    /// Shopify applies the moves asynchronously in a job.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::UserError` if Shopify rejects the moves.
    #[instrument(skip(self, moves), fields(count = moves.len()))]
    pub async fn reorder_collection_products(
        &self,
        collection_id: &str,
        moves: &[ProductMove],
    ) -> Result<(), ShopifyError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Payload {
            #[serde(default)]
            user_errors: Vec<UserError>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            collection_reorder_products: Payload,
        }

        let data: Data = self
            .query(
                queries::COLLECTION_REORDER_PRODUCTS,
                serde_json::json!({ "id": collection_id, "moves": moves }),
            )
            .await?;

        let errors = data.collection_reorder_products.user_errors;
        if !errors.is_empty() {
            return Err(ShopifyError::user_errors("Reorder", &errors));
        }
        Ok(())
    }
}

impl CollectionBackend for AdminClient {
    async fn read_collection(&self, id: &str) -> Result<Option<CollectionDetail>, ShopifyError> {
        self.get_collection(
            &CollectionLookup::Id(id.to_string()),
            FetchMode::All,
            DEFAULT_PRODUCTS_PAGE_SIZE,
        )
        .await
    }

    async fn create_collection(
        &self,
        input: &NewCollection,
    ) -> Result<CreatedCollection, ShopifyError> {
        Self::create_collection(self, input).await
    }

    async fn add_products(
        &self,
        collection_id: &str,
        product_ids: &[String],
    ) -> Result<(), ShopifyError> {
        self.add_products_to_collection(collection_id, product_ids)
            .await
    }

    async fn reorder_products(
        &self,
        collection_id: &str,
        moves: &[ProductMove],
    ) -> Result<(), ShopifyError> {
        self.reorder_collection_products(collection_id, moves).await
    }
}
