//! Integration tests for checkout and order tracking.

use axum::http::StatusCode;
use serde_json::json;

use brightcart_integration_tests::{TestApp, TestClient, checkout_form};

/// A visitor with one pair of headphones in the cart.
async fn visitor_with_headphones(app: &TestApp) -> TestClient {
    let mut client = app.client();
    let resp = client
        .post_json("/cart/add", &json!({ "product_id": 2 }))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    client
}

#[tokio::test]
async fn test_checkout_summary_totals() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;

    let resp = client.get("/checkout").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(resp.json["subtotal"], "$299.99");
    assert_eq!(resp.json["shipping"], "$9.99");
    assert_eq!(resp.json["tax"], "$24.00");
    assert_eq!(resp.json["total"], "$333.98");
}

#[tokio::test]
async fn test_place_order() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;

    let resp = client.post_json("/checkout", &checkout_form()).await;

    assert_eq!(resp.status, StatusCode::CREATED);
    let order = &resp.json["order"];
    assert!(
        order["id"]
            .as_str()
            .is_some_and(|id| id.starts_with("ORDER-"))
    );
    assert_eq!(order["status"], "processing");
    assert_eq!(order["totals"]["total"]["amount"], "333.98");
    assert_eq!(order["items"][0]["quantity"], 1);
    assert_eq!(order["customer"]["card_last4"], "1234");
    assert!(order["customer"].get("card_number").is_none());
    assert!(order["customer"].get("cvv").is_none());
    assert!(order["customer"].get("expiry_date").is_none());

    assert_eq!(resp.json["status_label"], "Processing");
    assert_eq!(resp.json["badge_color"], "blue");
    let steps = resp.json["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 4);
    let completed = steps.iter().filter(|step| step["completed"] == true).count();
    assert_eq!(completed, 2);
    assert_eq!(steps[3]["id"], "delivered");
    assert!(steps[3]["date"].as_str().is_some_and(|d| d.contains('/')));
}

#[tokio::test]
async fn test_place_order_empties_cart_and_shows_tracking() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;
    let placed = client.post_json("/checkout", &checkout_form()).await;
    assert_eq!(placed.status, StatusCode::CREATED);

    let cart = client.get("/cart").await;
    assert_eq!(cart.json["item_count"], 0);

    let home = client.get("/").await;
    assert_eq!(home.json["view"], "tracking");
    assert_eq!(home.json["has_order"], true);

    let tracking = client.get("/orders/current").await;
    assert_eq!(tracking.status, StatusCode::OK);
    assert_eq!(tracking.json["order"]["id"], placed.json["order"]["id"]);
}

#[tokio::test]
async fn test_dismiss_order_returns_to_store() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;
    client.post_json("/checkout", &checkout_form()).await;

    let resp = client.post("/orders/current/dismiss").await;
    assert_eq!(resp.status, StatusCode::NO_CONTENT);

    let tracking = client.get("/orders/current").await;
    assert_eq!(tracking.status, StatusCode::NOT_FOUND);

    let home = client.get("/").await;
    assert_eq!(home.json["view"], "store");
    assert_eq!(home.json["has_order"], false);
}

#[tokio::test]
async fn test_missing_field_is_rejected_and_cart_kept() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;
    let mut form = checkout_form();
    form["city"] = json!("   ");

    let resp = client.post_json("/checkout", &form).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.json["error"], "city is required");
    assert_eq!(resp.json["field"], "city");

    let cart = client.get("/cart").await;
    assert_eq!(cart.json["item_count"], 1);
}

#[tokio::test]
async fn test_absent_fields_are_reported_as_missing() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;

    let resp = client
        .post_json("/checkout", &json!({ "email": "grace@example.com" }))
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.json["field"], "first_name");
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;
    let mut form = checkout_form();
    form["email"] = json!("grace.example.com");

    let resp = client.post_json("/checkout", &form).await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp.json["field"], "email");
    assert!(
        resp.json["error"]
            .as_str()
            .is_some_and(|e| e.starts_with("invalid email"))
    );
}

#[tokio::test]
async fn test_malformed_form_is_bad_request_not_validation_error() {
    let app = TestApp::new();
    let mut client = visitor_with_headphones(&app).await;
    let mut form = checkout_form();
    form["email"] = json!(42);

    let resp = client.post_json("/checkout", &form).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.json["error"].is_string());
    assert!(resp.json.get("field").is_none());

    let cart = client.get("/cart").await;
    assert_eq!(cart.json["item_count"], 1);
}

#[tokio::test]
async fn test_empty_cart_cannot_check_out() {
    let mut client = TestApp::new().client();

    let resp = client.post_json("/checkout", &checkout_form()).await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.json, json!({ "error": "cart is empty" }));
}

#[tokio::test]
async fn test_no_current_order_is_not_found() {
    let mut client = TestApp::new().client();

    let resp = client.get("/orders/current").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
