//! Order tracking route handlers.

use axum::{Json, http::StatusCode};
use tower_sessions::Session;
use tracing::instrument;

use brightcart_core::OrderTracking;

use crate::error::{AppError, Result};
use crate::models::View;
use crate::models::session::{clear_order, load_order, save_view};

/// Show the tracking view for the session's current order.
#[instrument(skip(session))]
pub async fn current(session: Session) -> Result<Json<OrderTracking>> {
    let order = load_order(&session)
        .await?
        .ok_or_else(|| AppError::NotFound("no current order".to_string()))?;

    Ok(Json(OrderTracking::new(order)))
}

/// Go back to the store, forgetting the current order.
#[instrument(skip(session))]
pub async fn dismiss(session: Session) -> Result<StatusCode> {
    clear_order(&session).await?;
    save_view(&session, View::Store).await?;
    Ok(StatusCode::NO_CONTENT)
}
