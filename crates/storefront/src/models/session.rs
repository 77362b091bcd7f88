//! Session-related types.
//!
//! Everything a visitor accumulates (cart, current view, placed order) is
//! stored in their session under the keys below.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use brightcart_core::{Cart, Order};

/// Which top-level view the visitor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Catalog, with the detail and cart overlays.
    #[default]
    Store,
    Checkout,
    Tracking,
}

/// Session keys for storefront data.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the current top-level view.
    pub const VIEW: &str = "view";

    /// Key for the most recently placed order.
    pub const CURRENT_ORDER: &str = "current_order";
}

type SessionResult<T> = Result<T, tower_sessions::session::Error>;

/// Load the cart, or an empty one for a new session.
pub async fn load_cart(session: &Session) -> SessionResult<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Store the cart.
pub async fn save_cart(session: &Session, cart: &Cart) -> SessionResult<()> {
    session.insert(keys::CART, cart).await
}

/// Load the current view.
pub async fn load_view(session: &Session) -> SessionResult<View> {
    Ok(session.get::<View>(keys::VIEW).await?.unwrap_or_default())
}

/// Store the current view.
pub async fn save_view(session: &Session, view: View) -> SessionResult<()> {
    session.insert(keys::VIEW, view).await
}

/// Load the most recently placed order, if any.
pub async fn load_order(session: &Session) -> SessionResult<Option<Order>> {
    session.get::<Order>(keys::CURRENT_ORDER).await
}

/// Store a freshly placed order.
pub async fn save_order(session: &Session, order: &Order) -> SessionResult<()> {
    session.insert(keys::CURRENT_ORDER, order).await
}

/// Forget the current order.
pub async fn clear_order(session: &Session) -> SessionResult<()> {
    session.remove::<Order>(keys::CURRENT_ORDER).await.map(drop)
}
