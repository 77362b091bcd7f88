//! The cart state holder.
//!
//! A cart is an ordered list of line items. A line is identified by its
//! [`LineKey`] (product + selected color + selected size) and no two lines
//! ever share a key: adding an existing variant bumps its quantity instead
//! of appending a duplicate.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// Most units a single cart line can hold.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
}

impl LineKey {
    /// Create a line key.
    #[must_use]
    pub fn new(product_id: ProductId, color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            product_id,
            color: color.into(),
            size: size.into(),
        }
    }
}

/// A line in the cart: a product snapshot plus the chosen variant and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
    pub selected_color: String,
    pub selected_size: String,
}

impl CartItem {
    /// This line's identity.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product.id,
            self.selected_color.clone(),
            self.selected_size.clone(),
        )
    }

    fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id
            && self.selected_color == key.color
            && self.selected_size == key.size
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The cart state holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add `quantity` units of a product variant.
    ///
    /// A missing (or empty) color or size defaults to the product's first
    /// option. If a line with the resulting key already exists its quantity
    /// is incremented; otherwise a new line is appended. Adding zero units
    /// does nothing. Line quantities are capped at [`MAX_LINE_QUANTITY`].
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) {
        if quantity == 0 {
            return;
        }

        let color = color
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| product.default_color());
        let size = size
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| product.default_size());
        let key = LineKey::new(product.id, color, size);

        if let Some(item) = self.items.iter_mut().find(|item| item.matches(&key)) {
            item.quantity = item
                .quantity
                .saturating_add(quantity)
                .min(MAX_LINE_QUANTITY);
            return;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: quantity.min(MAX_LINE_QUANTITY),
            selected_color: key.color,
            selected_size: key.size,
        });
    }

    /// Set a line's quantity, capped at [`MAX_LINE_QUANTITY`]. Zero removes
    /// the line.
    ///
    /// Returns `false` if no line has this key.
    pub fn update(&mut self, key: &LineKey, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(key).is_some();
        }

        match self.items.iter_mut().find(|item| item.matches(key)) {
            Some(item) => {
                item.quantity = quantity.min(MAX_LINE_QUANTITY);
                true
            }
            None => false,
        }
    }

    /// Delete a line, returning it if it existed.
    pub fn remove(&mut self, key: &LineKey) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.matches(key))?;
        Some(self.items.remove(index))
    }

    /// Sum of price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units, as shown on the header badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty the cart, returning its lines.
    pub fn take(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}
