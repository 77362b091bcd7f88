//! Integration tests for view state and per-visitor isolation.

use axum::http::StatusCode;
use serde_json::json;

use brightcart_integration_tests::{TestApp, checkout_form};

#[tokio::test]
async fn test_new_visitor_starts_in_store() {
    let mut client = TestApp::new().client();

    let resp = client.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(
        resp.json,
        json!({ "view": "store", "cart_count": 0, "has_order": false })
    );
}

#[tokio::test]
async fn test_checkout_and_cancel_switch_views() {
    let mut client = TestApp::new().client();
    client
        .post_json("/cart/add", &json!({ "product_id": 5 }))
        .await;

    client.get("/checkout").await;
    let home = client.get("/").await;
    assert_eq!(home.json["view"], "checkout");
    assert_eq!(home.json["cart_count"], 1);

    let resp = client.post("/checkout/cancel").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["item_count"], 1);

    let home = client.get("/").await;
    assert_eq!(home.json["view"], "store");
}

#[tokio::test]
async fn test_visitors_do_not_share_carts() {
    let app = TestApp::new();
    let mut alice = app.client();
    let mut bob = app.client();

    alice
        .post_json("/cart/add", &json!({ "product_id": 1, "quantity": 2 }))
        .await;
    bob.post_json("/cart/add", &json!({ "product_id": 6 }))
        .await;

    let alice_cart = alice.get("/cart").await;
    let bob_cart = bob.get("/cart").await;
    assert_eq!(alice_cart.json["item_count"], 2);
    assert_eq!(alice_cart.json["items"][0]["product_id"], 1);
    assert_eq!(bob_cart.json["item_count"], 1);
    assert_eq!(bob_cart.json["items"][0]["product_id"], 6);
}

#[tokio::test]
async fn test_orders_do_not_leak_between_visitors() {
    let app = TestApp::new();
    let mut buyer = app.client();
    let mut browser = app.client();

    buyer
        .post_json("/cart/add", &json!({ "product_id": 3 }))
        .await;
    let placed = buyer.post_json("/checkout", &checkout_form()).await;
    assert_eq!(placed.status, StatusCode::CREATED);

    let resp = browser.get("/orders/current").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
