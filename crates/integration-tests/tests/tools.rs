//! Tool dispatch and MCP result shaping against a mock store.

use serde_json::{Value, json};
use shopify_admin_mcp::ShopifyMcpServer;
use shopify_admin_mcp::tools::{ToolError, ToolExecutor};
use shopify_admin_mcp_integration_tests::{data, graphql, mock_store, mutation_ok};
use wiremock::ResponseTemplate;
use wiremock::matchers::body_partial_json;

fn arguments(value: Value) -> Option<serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[tokio::test]
async fn test_missing_collection_returns_null() {
    let (server, client) = mock_store().await;
    graphql("query GetCollectionByHandle(")
        .respond_with(data(json!({ "collectionByHandle": null })))
        .mount(&server)
        .await;

    let output = ToolExecutor::new(&client)
        .execute("get_collection", &json!({ "handle": "gone" }))
        .await
        .unwrap();
    assert_eq!(output, "null");
}

#[tokio::test]
async fn test_search_products_defaults() {
    let (server, client) = mock_store().await;
    graphql("query SearchProducts(")
        .and(body_partial_json(json!({ "variables": { "first": 20, "query": "tag:sale" } })))
        .respond_with(data(json!({
            "products": {
                "edges": [{
                    "node": {
                        "id": "gid://shopify/Product/1",
                        "title": "Soap",
                        "handle": "soap",
                        "status": "ACTIVE",
                        "vendor": "Acme",
                        "productType": "Bath",
                        "createdAt": "2025-01-01T00:00:00Z",
                        "updatedAt": "2025-01-02T00:00:00Z"
                    }
                }],
                "pageInfo": { "hasNextPage": true, "endCursor": "p1" }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = ToolExecutor::new(&client)
        .execute("search_products", &json!({ "query": "tag:sale" }))
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["products"][0]["handle"], "soap");
    assert_eq!(value["hasNextPage"], true);
}

#[tokio::test]
async fn test_create_collection_defaults_to_manual_sort() {
    let (server, client) = mock_store().await;
    graphql("mutation CollectionCreate(")
        .and(body_partial_json(json!({
            "variables": { "input": { "title": "Gifts", "sortOrder": "MANUAL" } }
        })))
        .respond_with(data(mutation_ok(
            "collectionCreate",
            "collection",
            json!({ "id": "gid://shopify/Collection/77", "handle": "gifts" }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let output = ToolExecutor::new(&client)
        .execute("create_collection", &json!({ "title": "Gifts" }))
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["collectionId"], "gid://shopify/Collection/77");
    assert_eq!(
        value["adminUrl"],
        "https://admin.shopify.com/store/test-store/collections/77"
    );
}

#[tokio::test]
async fn test_articles_filter_by_blog() {
    let (server, client) = mock_store().await;
    graphql("query GetArticles(")
        .and(body_partial_json(json!({
            "variables": { "first": 10, "query": "blog_id:5" }
        })))
        .respond_with(data(json!({ "articles": { "edges": [], "pageInfo": { "hasNextPage": false } } })))
        .expect(1)
        .mount(&server)
        .await;

    let output = ToolExecutor::new(&client)
        .execute("get_articles", &json!({ "blog_id": "gid://shopify/Blog/5" }))
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, json!({ "articles": [] }));
}

#[tokio::test]
async fn test_collections_listed_under_collections_key() {
    let (server, client) = mock_store().await;
    graphql("query GetCollections(")
        .respond_with(data(json!({
            "collections": {
                "edges": [{ "node": {
                    "id": "gid://shopify/Collection/1",
                    "title": "Summer",
                    "handle": "summer",
                    "productsCount": { "count": 3 },
                    "updatedAt": "2025-06-01T00:00:00Z"
                } }],
                "pageInfo": { "hasNextPage": false }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = ToolExecutor::new(&client)
        .execute("get_collections", &json!({}))
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["collections"][0]["handle"], "summer");
    assert_eq!(value["collections"][0]["productsCount"], 3);
}

#[tokio::test]
async fn test_menus_listed_under_menus_key() {
    let (server, client) = mock_store().await;
    graphql("query GetMenus(")
        .respond_with(data(json!({
            "menus": {
                "edges": [{ "node": {
                    "id": "gid://shopify/Menu/1",
                    "title": "Main",
                    "handle": "main-menu",
                    "items": [{
                        "id": "gid://shopify/MenuItem/1",
                        "title": "Shop",
                        "type": "HTTP",
                        "url": "/shop",
                        "resourceId": null
                    }]
                } }],
                "pageInfo": { "hasNextPage": false }
            }
        })))
        .mount(&server)
        .await;

    let output = ToolExecutor::new(&client)
        .execute("get_menus", &json!({}))
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["menus"][0]["handle"], "main-menu");
    assert_eq!(value["menus"][0]["items"][0]["type"], "HTTP");
}

#[tokio::test]
async fn test_upstream_failure_propagates_from_executor() {
    let (server, client) = mock_store().await;
    graphql("query GetBlogs(")
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = ToolExecutor::new(&client)
        .execute("get_blogs", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Shopify(_)));
    assert_eq!(err.to_string(), "Shopify API error: 500 - boom");
}

#[tokio::test]
async fn test_server_reports_failure_as_error_result() {
    let (server, client) = mock_store().await;
    graphql("query GetMenus(")
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = ShopifyMcpServer::new(client)
        .dispatch("get_menus", arguments(json!({ "first": 5 })))
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["isError"], true);
    assert_eq!(value["content"][0]["text"], "Shopify API error: 500 - boom");
}

#[tokio::test]
async fn test_server_wraps_success_as_text() {
    let (server, client) = mock_store().await;
    graphql("query GetBlogs(")
        .respond_with(data(json!({
            "blogs": {
                "edges": [{ "node": { "id": "gid://shopify/Blog/5", "title": "News", "handle": "news" } }],
                "pageInfo": { "hasNextPage": false }
            }
        })))
        .mount(&server)
        .await;

    let result = ShopifyMcpServer::new(client)
        .dispatch("get_blogs", None)
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_ne!(value["isError"], true);
    let text = value["content"][0]["text"].as_str().unwrap();
    let value: Value = serde_json::from_str(text).unwrap();
    assert_eq!(value["blogs"][0]["handle"], "news");
}
