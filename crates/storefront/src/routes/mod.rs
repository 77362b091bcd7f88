//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Current view + cart badge count
//! GET  /health                  - Health check
//!
//! # Products
//! GET  /products                - Product listing (?category=Audio)
//! GET  /products/categories     - Category filter bar
//! GET  /products/{id}           - Product detail
//!
//! # Cart (JSON bodies, respond with the updated cart)
//! GET  /cart                    - Cart contents
//! POST /cart/add                - Add a product variant
//! POST /cart/update             - Set a line's quantity (0 removes)
//! POST /cart/remove             - Remove a line
//! GET  /cart/count              - Cart count badge
//!
//! # Checkout
//! GET  /checkout                - Enter checkout, order summary
//! POST /checkout                - Submit form, place order
//! POST /checkout/cancel         - Back to the cart
//!
//! # Orders
//! GET  /orders/current          - Tracking view
//! POST /orders/current/dismiss  - Back to the store
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/categories", get(products::categories))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(checkout::show).post(checkout::submit))
        .route("/cancel", post(checkout::cancel))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(orders::current))
        .route("/current/dismiss", post(orders::dismiss))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/orders", order_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
