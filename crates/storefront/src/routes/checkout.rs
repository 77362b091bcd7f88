//! Checkout route handlers.
//!
//! No payment is taken: submitting the form validates the required fields,
//! turns the session's cart into an order and moves the visitor on to the
//! tracking view.

use axum::http::StatusCode;
use chrono::Utc;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use brightcart_core::{CartItem, CheckoutForm, OrderTotals, OrderTracking, place_order};

use crate::error::{Result, add_breadcrumb};
use crate::extract::Json;
use crate::models::View;
use crate::models::session::{load_cart, save_cart, save_order, save_view};
use crate::routes::cart::{CartItemView, CartView};

/// Order summary shown beside the checkout form.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSummaryView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub tax: String,
    pub total: String,
}

impl CheckoutSummaryView {
    /// Summary of `items` priced at `totals`.
    #[must_use]
    pub fn new(items: &[CartItem], totals: &OrderTotals) -> Self {
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            subtotal: totals.subtotal.to_string(),
            shipping: totals.shipping.to_string(),
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
        }
    }
}

/// Enter checkout and show the order summary.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CheckoutSummaryView>> {
    let cart = load_cart(&session).await?;
    save_view(&session, View::Checkout).await?;

    let totals = OrderTotals::for_items(cart.items());
    Ok(Json(CheckoutSummaryView::new(cart.items(), &totals)))
}

/// Leave checkout and go back to the cart.
#[instrument(skip(session))]
pub async fn cancel(session: Session) -> Result<Json<CartView>> {
    save_view(&session, View::Store).await?;
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Submit the checkout form and place the order.
///
/// The order becomes the session's current order, then the emptied cart is
/// written back.
#[instrument(skip(session, form))]
pub async fn submit(
    session: Session,
    Json(form): Json<CheckoutForm>,
) -> Result<(StatusCode, Json<OrderTracking>)> {
    let mut cart = load_cart(&session).await?;

    let order = match place_order(&mut cart, &form, Utc::now()) {
        Ok(order) => order,
        Err(e) => {
            tracing::info!(error = %e, "Checkout rejected");
            return Err(e.into());
        }
    };

    save_order(&session, &order).await?;
    save_view(&session, View::Tracking).await?;
    save_cart(&session, &cart).await?;

    add_breadcrumb(
        "checkout",
        "Order placed",
        Some(&[("order_id", order.id.as_str())]),
    );
    tracing::info!(
        order_id = %order.id,
        item_count = order.item_count(),
        total = %order.totals.total,
        "Order placed"
    );

    Ok((StatusCode::CREATED, Json(OrderTracking::new(order))))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brightcart_core::{Cart, Catalog, ProductId};

    use super::*;

    #[test]
    fn test_summary_lists_items_with_totals() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new();
        cart.add(catalog.get(ProductId::new(2)).unwrap(), 1, None, None);
        cart.add(catalog.get(ProductId::new(6)).unwrap(), 2, None, None);

        let totals = OrderTotals::for_items(cart.items());
        let summary = CheckoutSummaryView::new(cart.items(), &totals);

        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[1].quantity, 2);
        assert_eq!(summary.items[1].line_price, "$299.98");
        assert_eq!(summary.subtotal, "$599.97");
        assert_eq!(summary.shipping, "$9.99");
        assert_eq!(summary.tax, "$48.00");
        assert_eq!(summary.total, "$657.96");
    }
}
