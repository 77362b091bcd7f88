//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Every mutation loads it, applies
//! the change through [`brightcart_core::Cart`] and writes it back, then
//! answers with the updated cart.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use brightcart_core::{Cart, CartItem, LineKey, MAX_LINE_QUANTITY, ProductId};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::extract::Json;
use crate::models::session::{load_cart, save_cart};
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id,
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            color: item.selected_color.clone(),
            size: item.selected_size.clone(),
            quantity: item.quantity,
            price: item.product.price.to_string(),
            line_price: item.line_total().to_string(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: cart.total().to_string(),
            item_count: cart.item_count(),
        }
    }
}

/// Header badge count.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: Option<u32>,
    pub color: Option<String>,
    pub size: Option<String>,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartRequest {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
    pub quantity: u32,
}

/// Remove line request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
}

/// Reject quantities no cart line can hold.
fn check_quantity(quantity: u32) -> Result<u32> {
    if quantity > MAX_LINE_QUANTITY {
        return Err(AppError::BadRequest(format!(
            "quantity must be at most {MAX_LINE_QUANTITY}"
        )));
    }
    Ok(quantity)
}

/// Display the cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add a product variant to the cart.
///
/// Quantity defaults to 1; color and size default to the product's first
/// options. A line never holds more than [`MAX_LINE_QUANTITY`] units.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartView>> {
    let quantity = check_quantity(request.quantity.unwrap_or(1))?;
    let product = state
        .catalog()
        .get(request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let mut cart = load_cart(&session).await?;
    cart.add(
        product,
        quantity,
        request.color.as_deref(),
        request.size.as_deref(),
    );
    save_cart(&session, &cart).await?;

    let product_id = request.product_id.to_string();
    add_breadcrumb(
        "cart",
        "Added to cart",
        Some(&[("product_id", product_id.as_str())]),
    );
    tracing::info!(
        product_id = %request.product_id,
        item_count = cart.item_count(),
        "Added to cart"
    );

    Ok(Json(CartView::from(&cart)))
}

/// Set a line's quantity; zero removes it.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(request): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let quantity = check_quantity(request.quantity)?;
    let key = LineKey::new(request.product_id, request.color, request.size);

    let mut cart = load_cart(&session).await?;
    if cart.update(&key, quantity) {
        save_cart(&session, &cart).await?;
    } else {
        tracing::debug!(?key, "Update for unknown cart line ignored");
    }

    Ok(Json(CartView::from(&cart)))
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(request): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let key = LineKey::new(request.product_id, request.color, request.size);

    let mut cart = load_cart(&session).await?;
    if cart.remove(&key).is_some() {
        save_cart(&session, &cart).await?;
    } else {
        tracing::debug!(?key, "Remove for unknown cart line ignored");
    }

    Ok(Json(CartView::from(&cart)))
}

/// Get the header badge count.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCountView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartCountView {
        count: cart.item_count(),
    }))
}
