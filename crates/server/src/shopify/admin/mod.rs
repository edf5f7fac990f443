//! Shopify Admin API transport.
//!
//! One `AdminClient` per process. It owns the endpoint URLs and the access
//! token; both are fixed at construction.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use shopify_admin_mcp_core::legacy_resource_id;
use tracing::instrument;
use url::Url;

use crate::config::ShopifyConfig;

use super::{Api, GraphQLError, Shop, ShopifyError};

mod blogs;
mod collections;
mod menus;
mod orders;
mod products;
pub mod queries;
mod themes;

pub use blogs::article_search;
pub use collections::{CollectionLookup, DEFAULT_PRODUCTS_PAGE_SIZE};
pub use orders::{DEFAULT_RANKING_LIMIT, paid_orders_filter};
pub use products::ProductLookup;

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Shopify Admin API client.
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    graphql_endpoint: Url,
    /// Ends with `/` so relative REST paths join under it.
    rest_base: Url,
    access_token: SecretString,
    admin_store_handle: String,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("graphql_endpoint", &self.inner.graphql_endpoint.as_str())
            .field("rest_base", &self.inner.rest_base.as_str())
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

impl AdminClient {
    /// Create a client for `https://{shop_domain}`.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Configuration` if the domain or token is empty,
    /// the domain does not form a valid URL, or the HTTP client cannot be
    /// built. No network call is made.
    pub fn new(config: &ShopifyConfig) -> Result<Self, ShopifyError> {
        if config.shop_domain.trim().is_empty() {
            return Err(ShopifyError::Configuration(
                "SHOPIFY_SHOP_DOMAIN is required".to_string(),
            ));
        }
        let origin = Url::parse(&format!("https://{}", config.shop_domain))
            .map_err(|e| ShopifyError::Configuration(format!("invalid shop domain: {e}")))?;
        Self::with_origin(config, &origin)
    }

    /// Create a client against an explicit origin (proxy or mock server).
    ///
    /// # Errors
    ///
    /// Same as [`AdminClient::new`].
    pub fn with_origin(config: &ShopifyConfig, origin: &Url) -> Result<Self, ShopifyError> {
        if config.access_token.expose_secret().trim().is_empty() {
            return Err(ShopifyError::Configuration(
                "SHOPIFY_ACCESS_TOKEN is required".to_string(),
            ));
        }

        let api_root = format!("admin/api/{}/", config.api_version);
        let rest_base = origin
            .join(&api_root)
            .map_err(|e| ShopifyError::Configuration(format!("invalid API base URL: {e}")))?;
        let graphql_endpoint = rest_base
            .join("graphql.json")
            .map_err(|e| ShopifyError::Configuration(format!("invalid GraphQL URL: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ShopifyError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                graphql_endpoint,
                rest_base,
                access_token: config.access_token.clone(),
                admin_store_handle: config.admin_store_handle.clone(),
            }),
        })
    }

    /// GraphQL endpoint URL.
    #[must_use]
    pub fn graphql_endpoint(&self) -> &Url {
        &self.inner.graphql_endpoint
    }

    /// Link to a resource in the Shopify admin UI.
    ///
    /// `section` is the admin path segment (`collections`, `articles`, ...).
    #[must_use]
    pub fn admin_url(&self, section: &str, gid: &str) -> String {
        format!(
            "https://admin.shopify.com/store/{}/{section}/{}",
            self.inner.admin_store_handle,
            legacy_resource_id(gid)
        )
    }

    // =========================================================================
    // GraphQL
    // =========================================================================

    /// Execute a GraphQL document and decode its `data` payload.
    ///
    /// # Errors
    ///
    /// - `ShopifyError::Http` if the request cannot be sent
    /// - `ShopifyError::Status` for a non-success HTTP status (body retained)
    /// - `ShopifyError::GraphQL` if the response carries any errors, even
    ///   alongside data
    /// - `ShopifyError::NoData` if `data` is absent or null
    /// - `ShopifyError::Parse` if the payload does not match `T`
    #[instrument(skip(self, document, variables), fields(operation = operation_name(document)))]
    pub async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, ShopifyError> {
        let request = GraphQLRequest {
            query: document,
            variables,
        };

        let response = self
            .inner
            .client
            .post(self.inner.graphql_endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, self.inner.access_token.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "GraphQL request failed");
            return Err(ShopifyError::Status {
                api: Api::GraphQL,
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQLResponse = serde_json::from_str(&body)?;

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            return Err(ShopifyError::GraphQL(errors));
        }

        let data = envelope
            .data
            .filter(|d| !d.is_null())
            .ok_or(ShopifyError::NoData)?;

        Ok(serde_json::from_value(data)?)
    }

    // =========================================================================
    // REST
    // =========================================================================

    /// `GET` a REST resource relative to the versioned API base.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Status` for a non-success status and
    /// `ShopifyError::Parse` if the body does not match `T`.
    #[instrument(skip(self, params))]
    pub async fn rest_get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ShopifyError> {
        let mut url = self.rest_url(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let response = self
            .inner
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, self.inner.access_token.expose_secret())
            .send()
            .await?;

        Self::decode_rest(response).await
    }

    /// `PUT` a JSON body to a REST resource.
    ///
    /// # Errors
    ///
    /// Same as [`AdminClient::rest_get`].
    #[instrument(skip(self, body))]
    pub async fn rest_put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ShopifyError> {
        let url = self.rest_url(path)?;

        let response = self
            .inner
            .client
            .put(url)
            .header(ACCESS_TOKEN_HEADER, self.inner.access_token.expose_secret())
            .json(body)
            .send()
            .await?;

        Self::decode_rest(response).await
    }

    fn rest_url(&self, path: &str) -> Result<Url, ShopifyError> {
        self.inner
            .rest_base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ShopifyError::InvalidInput(format!("invalid REST path '{path}': {e}")))
    }

    async fn decode_rest<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ShopifyError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ShopifyError::Status {
                api: Api::Rest,
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Shop
    // =========================================================================

    /// Fetch basic shop details to verify credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn test_connection(&self) -> Result<Shop, ShopifyError> {
        #[derive(Deserialize)]
        struct Data {
            shop: Shop,
        }

        let data: Data = self
            .query(queries::SHOP, serde_json::json!({}))
            .await?;
        Ok(data.shop)
    }
}

/// Operation name of a GraphQL document, for log fields.
fn operation_name(document: &str) -> &str {
    let mut words = document.split(|c: char| c.is_whitespace() || c == '(' || c == '{');
    words
        .by_ref()
        .find(|w| matches!(*w, "query" | "mutation"))
        .and_then(|_| words.find(|w| !w.is_empty()))
        .unwrap_or("anonymous")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> ShopifyConfig {
        ShopifyConfig::new("test-store.myshopify.com", "shpat_test").unwrap()
    }

    #[test]
    fn test_endpoints_follow_api_version() {
        let client = AdminClient::new(&config()).unwrap();
        assert_eq!(
            client.graphql_endpoint().as_str(),
            "https://test-store.myshopify.com/admin/api/2024-10/graphql.json"
        );
        assert_eq!(
            client.rest_url("/themes.json").unwrap().as_str(),
            "https://test-store.myshopify.com/admin/api/2024-10/themes.json"
        );
    }

    #[test]
    fn test_empty_token_is_configuration_error() {
        let mut config = config();
        config.access_token = SecretString::from(String::new());
        let err = AdminClient::new(&config).unwrap_err();
        assert!(matches!(err, ShopifyError::Configuration(_)));
        assert_eq!(err.to_string(), "Configuration error: SHOPIFY_ACCESS_TOKEN is required");
    }

    #[test]
    fn test_empty_domain_is_configuration_error() {
        let mut config = config();
        config.shop_domain = String::new();
        assert!(matches!(
            AdminClient::new(&config),
            Err(ShopifyError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_domain_is_configuration_error() {
        let mut config = config();
        config.shop_domain = "bad domain:99999".to_string();
        assert!(matches!(
            AdminClient::new(&config),
            Err(ShopifyError::Configuration(_))
        ));
    }

    #[test]
    fn test_admin_url_uses_legacy_id() {
        let client = AdminClient::new(&config()).unwrap();
        assert_eq!(
            client.admin_url("collections", "gid://shopify/Collection/42"),
            "https://admin.shopify.com/store/test-store/collections/42"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = AdminClient::new(&config()).unwrap();
        let output = format!("{client:?}");
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("shpat_test"));
    }

    #[test]
    fn test_operation_name() {
        assert_eq!(operation_name(queries::SHOP), "TestConnection");
        assert_eq!(
            operation_name("mutation CollectionCreate($input: CollectionInput!) { x }"),
            "CollectionCreate"
        );
        assert_eq!(operation_name("{ shop { name } }"), "anonymous");
    }
}
