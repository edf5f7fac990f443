//! Integration tests for the Shopify Admin MCP server.
//!
//! Every test starts a `wiremock` server standing in for the store and points
//! a real [`AdminClient`] at it, so requests go through the full HTTP stack.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopify-admin-mcp-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `transport` - Status, GraphQL error and REST handling
//! - `pagination` - Cursor walks and ranking across pages
//! - `collections` - Link-and-order and collection duplication
//! - `tools` - Tool dispatch and MCP result shaping

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use serde_json::{Value, json};
use shopify_admin_mcp::{AdminClient, ShopifyConfig};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{MockBuilder, MockServer, ResponseTemplate};

/// Access token the mock store expects.
pub const TOKEN: &str = "shpat_integration_test";

/// GraphQL endpoint path for the default API version.
pub const GRAPHQL_PATH: &str = "/admin/api/2024-10/graphql.json";

/// REST base path for the default API version.
pub const REST_PATH: &str = "/admin/api/2024-10";

/// Start a mock store and a client pointed at it.
pub async fn mock_store() -> (MockServer, AdminClient) {
    let server = MockServer::start().await;
    let config = ShopifyConfig::new("test-store.myshopify.com", TOKEN).unwrap();
    let origin = url::Url::parse(&server.uri()).unwrap();
    let client = AdminClient::with_origin(&config, &origin).unwrap();
    (server, client)
}

/// Match a GraphQL request whose document contains `operation`,
/// e.g. `"mutation CollectionCreate("`.
#[must_use]
pub fn graphql(operation: &str) -> MockBuilder {
    wiremock::Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains(operation))
}

/// A 200 response wrapping `data` in the GraphQL envelope.
#[must_use]
pub fn data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// A `collection` payload with one page of products.
#[must_use]
pub fn collection_page(
    id: &str,
    description_html: &str,
    products: &[(&str, &str)],
    next_cursor: Option<&str>,
) -> Value {
    let edges: Vec<Value> = products
        .iter()
        .map(|(id, title)| json!({ "node": { "id": id, "title": title, "handle": title.to_lowercase() } }))
        .collect();

    json!({
        "collection": {
            "id": id,
            "title": "Summer",
            "handle": "summer",
            "descriptionHtml": description_html,
            "productsCount": { "count": 3 },
            "products": {
                "edges": edges,
                "pageInfo": { "hasNextPage": next_cursor.is_some(), "endCursor": next_cursor }
            }
        }
    })
}

/// A mutation payload with no user errors.
#[must_use]
pub fn mutation_ok(field: &str, entity: &str, value: Value) -> Value {
    json!({ field: { entity: value, "userErrors": [] } })
}

/// A mutation payload rejected with `message`.
#[must_use]
pub fn mutation_rejected(field: &str, entity: &str, message: &str) -> Value {
    json!({ field: { entity: null, "userErrors": [{ "field": ["id"], "message": message }] } })
}
