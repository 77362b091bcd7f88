//! Home route handler.

use axum::Json;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::View;
use crate::models::session::{load_cart, load_order, load_view};

/// Which view the visitor should see, plus the header badge count.
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub view: View,
    pub cart_count: u32,
    pub has_order: bool,
}

/// Resolve the visitor's current view.
///
/// A tracking view without an order falls back to the store.
#[instrument(skip(session))]
pub async fn home(session: Session) -> Result<Json<HomeView>> {
    let cart = load_cart(&session).await?;
    let has_order = load_order(&session).await?.is_some();
    let view = match load_view(&session).await? {
        View::Tracking if !has_order => View::Store,
        view => view,
    };

    Ok(Json(HomeView {
        view,
        cart_count: cart.item_count(),
        has_order,
    }))
}
