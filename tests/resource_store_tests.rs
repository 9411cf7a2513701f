//! Integration tests for the resource store's fetch operations.
//!
//! These tests verify per-collection loading/error state, stale-but-valid
//! data on failure, and the last-write-wins-by-completion ordering of
//! overlapping fetches.

use std::time::Duration;

use accountrix_client::resources::ProductFilter;
use accountrix_client::{ApiBaseUrl, ClientConfig, ResourceStore, SessionHandle, SessionSecret};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a store backed by the given mock server, with an
/// unauthenticated session (fetches are not gated).
fn store_for(server: &MockServer) -> ResourceStore {
    let config = ClientConfig::builder()
        .api_base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .session_secret(SessionSecret::new("session-signing-secret").unwrap())
        .build()
        .unwrap();
    let session = SessionHandle::new();
    session.resolve_unauthenticated();
    ResourceStore::new(&config, session)
}

// ============================================================================
// Basic fetch behavior
// ============================================================================

#[tokio::test]
async fn test_filtered_catalog_fetch_populates_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("search", "chair"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Chair"}
        ])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store
        .fetch_products(Some(&ProductFilter::new().search("chair")))
        .await;

    let catalog = store.products();
    assert_eq!(catalog.items.len(), 1);
    assert_eq!(catalog.items[0].id, 1);
    assert_eq!(catalog.items[0].name, "Chair");
    assert!(!catalog.loading);
    assert!(catalog.error.is_none());
}

#[tokio::test]
async fn test_each_collection_fetches_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 7, "name": "Furniture"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 301,
                "order_number": "ORD-000301",
                "total_amount": 149.5,
                "status": "shipped",
                "created_at": "2026-07-01T12:30:00Z"
            }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cart/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"product_id": 42, "quantity": 2}
        ])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_categories().await;
    store.fetch_orders().await;
    store.fetch_basket().await;

    assert_eq!(store.categories().items.len(), 1);
    assert_eq!(store.orders().items.len(), 1);
    assert_eq!(store.basket().items.len(), 1);
    // The catalog was never fetched and is untouched.
    assert!(store.products().items.is_empty());
    assert!(store.products().error.is_none());
}

#[tokio::test]
async fn test_failed_fetch_preserves_previous_data() {
    let server = MockServer::start().await;
    let success = Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Chair"}
        ])))
        .up_to_n_times(1)
        .mount_as_scoped(&server)
        .await;

    let store = store_for(&server);
    store.fetch_products(None).await;
    assert_eq!(store.products().items.len(), 1);

    // Replace the stub with a failure for the second fetch.
    drop(success);
    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "detail": "Service unavailable."
            })),
        )
        .mount(&server)
        .await;

    store.fetch_products(None).await;

    // Stale-but-valid: items intact, error recorded, loading cleared.
    let catalog = store.products();
    assert_eq!(catalog.items.len(), 1);
    assert_eq!(catalog.error.as_deref(), Some("Service unavailable."));
    assert!(!catalog.loading);
}

#[tokio::test]
async fn test_successful_fetch_clears_a_prior_error() {
    let server = MockServer::start().await;
    let failure = Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount_as_scoped(&server)
        .await;

    let store = store_for(&server);
    store.fetch_products(None).await;
    assert!(store.products().error.is_some());

    drop(failure);
    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 2, "name": "Desk"}
        ])))
        .mount(&server)
        .await;

    store.fetch_products(None).await;

    let catalog = store.products();
    assert_eq!(catalog.items.len(), 1);
    assert!(catalog.error.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_a_normal_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_products(None).await;

    let catalog = store.products();
    assert!(catalog.items.is_empty());
    assert!(catalog.error.is_some());
    assert!(!catalog.loading);
}

// ============================================================================
// Overlapping fetches: last write wins by completion order
// ============================================================================

#[tokio::test]
async fn test_slow_first_fetch_does_not_overwrite_fast_second_fetch() {
    let server = MockServer::start().await;

    // The first query ("chair") is slow; the retyped query ("desk")
    // resolves immediately.
    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("search", "chair"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": 1, "name": "Chair"}]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("search", "desk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 2, "name": "Desk"}
        ])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let first = ProductFilter::new().search("chair");
    let second = ProductFilter::new().search("desk");

    // Issue in order: "chair" before "desk". join! polls in order, so the
    // sequence stamps match invocation order.
    tokio::join!(
        store.fetch_products(Some(&first)),
        store.fetch_products(Some(&second)),
    );

    // The store reflects the later-issued fetch even though the earlier
    // one completed last.
    let catalog = store.products();
    assert_eq!(catalog.items.len(), 1);
    assert_eq!(catalog.items[0].name, "Desk");
    assert!(!catalog.loading);
    assert!(catalog.error.is_none());
}

#[tokio::test]
async fn test_slow_failure_does_not_clobber_fast_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("search", "chair"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(serde_json::json!({"detail": "Service unavailable."}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(query_param("search", "desk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 2, "name": "Desk"}
        ])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let first = ProductFilter::new().search("chair");
    let second = ProductFilter::new().search("desk");

    tokio::join!(
        store.fetch_products(Some(&first)),
        store.fetch_products(Some(&second)),
    );

    // The stale failure is discarded entirely: no error surfaces.
    let catalog = store.products();
    assert_eq!(catalog.items[0].name, "Desk");
    assert!(catalog.error.is_none());
}

// ============================================================================
// Analytics summary
// ============================================================================

#[tokio::test]
async fn test_analytics_summary_fetch_is_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports/ecommerce-analytics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "report_type": "E-commerce Analytics",
            "summary": {
                "total_orders": 18,
                "total_revenue": 2450.0,
                "net_profit": 2205.0
            }
        })))
        .mount(&server)
        .await;

    let store = store_for(&server);
    assert!(store.analytics_summary().is_none());

    store.fetch_analytics_summary().await;

    let summary = store.analytics_summary().expect("summary should be set");
    assert_eq!(summary.total_orders, 18);
    assert!((summary.total_revenue - 2450.0).abs() < f64::EPSILON);
    assert!((summary.net_profit - 2205.0).abs() < f64::EPSILON);
    assert!(store.analytics_error().is_none());

    // No collection's loading flag was involved.
    assert!(!store.products().loading);
    assert!(!store.orders().loading);
}

#[tokio::test]
async fn test_failed_analytics_fetch_keeps_previous_summary() {
    let server = MockServer::start().await;
    let success = Mock::given(method("GET"))
        .and(path("/reports/ecommerce-analytics/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "summary": {"total_orders": 18, "total_revenue": 2450.0, "net_profit": 2205.0}
        })))
        .up_to_n_times(1)
        .mount_as_scoped(&server)
        .await;

    let store = store_for(&server);
    store.fetch_analytics_summary().await;
    assert!(store.analytics_summary().is_some());

    drop(success);
    Mock::given(method("GET"))
        .and(path("/reports/ecommerce-analytics/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    store.fetch_analytics_summary().await;

    assert!(store.analytics_summary().is_some());
    assert!(store.analytics_error().is_some());
}
