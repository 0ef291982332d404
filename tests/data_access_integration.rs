//! Data access integration tests
//!
//! End-to-end flows through the composition root: repository calls against a
//! mock backend, with the results recorded in the device session.

use app_core::{AppConfig, AppContext};
use commerce_client::models::{DraftOrderRequest, LineItem};
use commerce_client::{ClientConfig, NetworkError};
use serde_json::json;
use storage::{KvConfig, PrefKey};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn context_for(server: &MockServer, dir: &TempDir) -> AppContext {
    let path = dir.path().join("shopper.db").to_string_lossy().to_string();
    let config = AppConfig::default()
        .with_client(ClientConfig::new(server.uri()).with_access_token("shpat_test"))
        .with_storage(KvConfig::new(path));
    AppContext::new(config).unwrap()
}

/// Log in by email, create the favorites and cart draft orders, and persist the session
#[tokio::test]
async fn test_login_flow_records_session() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/customers.json"))
        .and(query_param("email", "a@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customers": [{"id": 42, "first_name": "Alice", "email": "a@x.com", "currency": "EGP"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/draft_orders.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "draft_order": {"id": 900, "status": "open"}
        })))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/draft_orders.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "draft_order": {"id": 901, "status": "open"}
        })))
        .mount(&mock_server)
        .await;

    let context = context_for(&mock_server, &temp_dir);
    let repository = context.repository();

    let customer = repository.get_customer_by_email("a@x.com").await.unwrap();
    context.session().begin(&customer).unwrap();

    let favorites = repository
        .create_draft_order(&DraftOrderRequest::for_customer(customer.id).note("favorites"))
        .await
        .unwrap();
    let cart = repository
        .create_draft_order(&DraftOrderRequest::for_customer(customer.id).note("cart"))
        .await
        .unwrap();
    context.session().set_lists(favorites.id, cart.id).unwrap();

    let session = context.session().current().unwrap();
    assert_eq!(session.customer_id, 42);
    assert_eq!(session.name, "Alice");
    assert_eq!(session.currency, "EGP");
    assert_eq!(session.fav_list_id, Some(900));
    assert_eq!(session.cart_list_id, Some(901));
}

/// A failed lookup leaves the session untouched
#[tokio::test]
async fn test_failed_login_keeps_logged_out() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/customers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"customers": []})))
        .mount(&mock_server)
        .await;

    let context = context_for(&mock_server, &temp_dir);
    let err = context
        .repository()
        .get_customer_by_email("ghost@x.com")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!context.session().is_logged_in());
    assert_eq!(context.preferences().retrieve(PrefKey::Id, "none"), "none");
}

/// Adding to the cart is an update of the cart draft order followed by a read
#[tokio::test]
async fn test_cart_update_read_after_write() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cart = json!({
        "draft_order": {
            "id": 901,
            "line_items": [{"id": 1, "variant_id": 55, "quantity": 2, "price": "12.00"}],
            "total_price": "24.00"
        }
    });

    Mock::given(method("PUT"))
        .and(path("/draft_orders/901.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&cart))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/draft_orders/901.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&cart))
        .expect(1)
        .mount(&mock_server)
        .await;

    let context = context_for(&mock_server, &temp_dir);
    let request = DraftOrderRequest::default().line_item(LineItem::for_variant(55, 2));

    context
        .repository()
        .update_draft_order(901, &request)
        .await
        .unwrap();
    let fetched = context.repository().get_draft_order(901).await.unwrap();

    assert_eq!(fetched.item_count(), 2);
    assert_eq!(fetched.total_price.as_deref(), Some("24.00"));
}

/// Brand listing followed by that brand's products
#[tokio::test]
async fn test_browse_brand_catalog() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/smart_collections.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "smart_collections": [{"id": 1, "title": "VANS"}]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("vendor", "VANS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"id": 10, "vendor": "VANS"}, {"id": 11, "vendor": "VANS"}]
        })))
        .mount(&mock_server)
        .await;

    let context = context_for(&mock_server, &temp_dir);
    let brands = context.repository().get_brands().await.unwrap();
    let products = context
        .repository()
        .get_brand_products(brands[0].vendor())
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.vendor.as_deref() == Some("VANS")));
}

/// Backend errors reach the caller unchanged through the repository
#[tokio::test]
async fn test_errors_reach_caller_unchanged() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/price_rules.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/5.json"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({"errors": "Bad Gateway"})))
        .mount(&mock_server)
        .await;

    let context = context_for(&mock_server, &temp_dir);

    let decode = context.repository().get_discount_codes().await.unwrap_err();
    assert!(matches!(decode, NetworkError::Decode(_)));

    let server = context.repository().get_product_by_id(5).await.unwrap_err();
    assert_eq!(
        server,
        NetworkError::Server {
            status: 502,
            message: "Bad Gateway".to_string(),
        }
    );
}
