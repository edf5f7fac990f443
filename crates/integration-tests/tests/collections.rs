//! Link-and-order and collection duplication against a mock store.

use serde_json::json;
use shopify_admin_mcp::orchestration::{
    DuplicateRequest, StepOutcome, StepPolicy, duplicate_collection, link_and_order,
};
use shopify_admin_mcp::shopify::{ErrorKind, ShopifyError};
use shopify_admin_mcp_integration_tests::{
    GRAPHQL_PATH, collection_page, data, graphql, mock_store, mutation_ok, mutation_rejected,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOURCE: &str = "gid://shopify/Collection/1";
const TARGET: &str = "gid://shopify/Collection/2";

fn product_ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

async fn mount_add_ok(server: &MockServer, expected_calls: u64) {
    graphql("mutation CollectionAddProducts(")
        .respond_with(data(mutation_ok(
            "collectionAddProducts",
            "collection",
            json!({ "id": TARGET }),
        )))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_reorder_ok(server: &MockServer, expected_calls: u64) {
    graphql("mutation CollectionReorderProducts(")
        .respond_with(data(mutation_ok(
            "collectionReorderProducts",
            "job",
            json!({ "id": "gid://shopify/Job/1", "done": false }),
        )))
        .expect(expected_calls)
        .mount(server)
        .await;
}

async fn mount_create_ok(server: &MockServer) {
    graphql("mutation CollectionCreate(")
        .respond_with(data(mutation_ok(
            "collectionCreate",
            "collection",
            json!({ "id": TARGET, "handle": "summer-copy" }),
        )))
        .expect(1)
        .mount(server)
        .await;
}

// =============================================================================
// Link-and-order
// =============================================================================

#[tokio::test]
async fn test_link_and_order_sends_positional_moves() {
    let (server, client) = mock_store().await;
    graphql("mutation CollectionAddProducts(")
        .and(body_partial_json(json!({
            "variables": {
                "id": TARGET,
                "productIds": ["gid://shopify/Product/9", "gid://shopify/Product/4"]
            }
        })))
        .respond_with(data(mutation_ok(
            "collectionAddProducts",
            "collection",
            json!({ "id": TARGET }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    graphql("mutation CollectionReorderProducts(")
        .and(body_partial_json(json!({
            "variables": {
                "moves": [
                    { "id": "gid://shopify/Product/9", "newPosition": "0" },
                    { "id": "gid://shopify/Product/4", "newPosition": "1" }
                ]
            }
        })))
        .respond_with(data(mutation_ok(
            "collectionReorderProducts",
            "job",
            json!({ "id": "gid://shopify/Job/1" }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let ids = product_ids(&["gid://shopify/Product/9", "gid://shopify/Product/4"]);
    let outcome = link_and_order(&client, TARGET, &ids).await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.added_count, 2);
    assert!(
        outcome
            .steps
            .iter()
            .all(|s| s.outcome == StepOutcome::Completed)
    );
}

#[tokio::test]
async fn test_reorder_failure_is_a_warning() {
    let (server, client) = mock_store().await;
    mount_add_ok(&server, 1).await;
    graphql("mutation CollectionReorderProducts(")
        .respond_with(data(mutation_rejected(
            "collectionReorderProducts",
            "job",
            "Collection is not manually sorted",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let ids = product_ids(&["gid://shopify/Product/1"]);
    let outcome = link_and_order(&client, TARGET, &ids).await.unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.added_count, 1);
    let reorder = &outcome.steps[1];
    assert_eq!(reorder.step, "reorder_products");
    assert_eq!(reorder.policy, StepPolicy::Warn);
    assert_eq!(
        reorder.outcome,
        StepOutcome::Warned {
            message: "Reorder failed: Collection is not manually sorted".to_string()
        }
    );
}

#[tokio::test]
async fn test_reorder_transport_failure_is_a_warning() {
    let (server, client) = mock_store().await;
    mount_add_ok(&server, 1).await;
    graphql("mutation CollectionReorderProducts(")
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let ids = product_ids(&["gid://shopify/Product/1"]);
    let outcome = link_and_order(&client, TARGET, &ids).await.unwrap();
    assert!(outcome.success);
    assert!(matches!(outcome.steps[1].outcome, StepOutcome::Warned { .. }));
}

#[tokio::test]
async fn test_add_failure_aborts_before_reorder() {
    let (server, client) = mock_store().await;
    graphql("mutation CollectionAddProducts(")
        .respond_with(data(mutation_rejected(
            "collectionAddProducts",
            "collection",
            "Product does not exist",
        )))
        .expect(1)
        .mount(&server)
        .await;
    mount_reorder_ok(&server, 0).await;

    let ids = product_ids(&["gid://shopify/Product/404"]);
    let err = link_and_order(&client, TARGET, &ids).await.unwrap_err();

    assert!(matches!(err, ShopifyError::UserError(_)));
    assert_eq!(err.to_string(), "Add products failed: Product does not exist");
}

#[tokio::test]
async fn test_empty_product_list_makes_no_calls() {
    let (server, client) = mock_store().await;
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = link_and_order(&client, TARGET, &[]).await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.added_count, 0);
    assert!(
        outcome
            .steps
            .iter()
            .all(|s| s.outcome == StepOutcome::Skipped)
    );
}

// =============================================================================
// Duplicate
// =============================================================================

fn request() -> DuplicateRequest {
    DuplicateRequest {
        source_collection_id: SOURCE.to_string(),
        new_title: "Summer (copy)".to_string(),
        new_handle: Some("summer-copy".to_string()),
    }
}

#[tokio::test]
async fn test_duplicate_copies_products_in_order() {
    let (server, client) = mock_store().await;
    graphql("query GetCollection(")
        .respond_with(data(collection_page(
            SOURCE,
            "<p>Hot days</p>",
            &[
                ("gid://shopify/Product/3", "C"),
                ("gid://shopify/Product/1", "A"),
                ("gid://shopify/Product/2", "B"),
            ],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;
    graphql("mutation CollectionCreate(")
        .and(body_partial_json(json!({
            "variables": {
                "input": {
                    "title": "Summer (copy)",
                    "handle": "summer-copy",
                    "descriptionHtml": "<p>Hot days</p>",
                    "sortOrder": "MANUAL"
                }
            }
        })))
        .respond_with(data(mutation_ok(
            "collectionCreate",
            "collection",
            json!({ "id": TARGET, "handle": "summer-copy" }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    graphql("mutation CollectionAddProducts(")
        .and(body_partial_json(json!({
            "variables": {
                "id": TARGET,
                "productIds": [
                    "gid://shopify/Product/3",
                    "gid://shopify/Product/1",
                    "gid://shopify/Product/2"
                ]
            }
        })))
        .respond_with(data(mutation_ok(
            "collectionAddProducts",
            "collection",
            json!({ "id": TARGET }),
        )))
        .expect(1)
        .mount(&server)
        .await;
    mount_reorder_ok(&server, 1).await;

    let outcome = duplicate_collection(&client, &request()).await.unwrap();

    assert_eq!(outcome.source_collection.id, SOURCE);
    assert_eq!(outcome.source_collection.title, "Summer");
    assert_eq!(outcome.new_collection.collection_id, TARGET);
    assert_eq!(
        outcome.new_collection.admin_url,
        "https://admin.shopify.com/store/test-store/collections/2"
    );
    assert_eq!(outcome.products_count, 3);

    let steps: Vec<_> = outcome.steps.iter().map(|s| s.step).collect();
    assert_eq!(
        steps,
        [
            "read_source",
            "create_collection",
            "add_products",
            "reorder_products"
        ]
    );
}

#[tokio::test]
async fn test_duplicate_empty_source_skips_linking() {
    let (server, client) = mock_store().await;
    graphql("query GetCollection(")
        .respond_with(data(collection_page(SOURCE, "", &[], None)))
        .expect(1)
        .mount(&server)
        .await;
    mount_create_ok(&server).await;
    mount_add_ok(&server, 0).await;
    mount_reorder_ok(&server, 0).await;

    let outcome = duplicate_collection(&client, &request()).await.unwrap();
    assert_eq!(outcome.products_count, 0);
    assert_eq!(outcome.steps[2].outcome, StepOutcome::Skipped);
    assert_eq!(outcome.steps[3].outcome, StepOutcome::Skipped);
}

#[tokio::test]
async fn test_duplicate_missing_source_creates_nothing() {
    let (server, client) = mock_store().await;
    graphql("query GetCollection(")
        .respond_with(data(json!({ "collection": null })))
        .mount(&server)
        .await;
    graphql("mutation CollectionCreate(")
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let err = duplicate_collection(&client, &request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), format!("Collection not found: {SOURCE}"));
}

#[tokio::test]
async fn test_duplicate_add_failure_leaves_new_collection() {
    let (server, client) = mock_store().await;
    graphql("query GetCollection(")
        .respond_with(data(collection_page(
            SOURCE,
            "",
            &[("gid://shopify/Product/1", "A")],
            None,
        )))
        .mount(&server)
        .await;
    mount_create_ok(&server).await;
    graphql("mutation CollectionAddProducts(")
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;
    mount_reorder_ok(&server, 0).await;

    let err = duplicate_collection(&client, &request()).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Shopify API error: 500 - Internal Server Error"
    );
    // `expect(1)` on the create mock verifies the collection was created
}
