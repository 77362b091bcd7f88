//! Order quote command.
//!
//! Builds a cart from `ID[:QTY]` lines using each product's default options
//! and prints the totals checkout would charge.

use core::str::FromStr;

use thiserror::Error;
use tracing::info;

use brightcart_core::{Cart, Catalog, OrderTotals, ProductId};

use super::CommandError;

/// One `ID[:QTY]` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Error parsing a [`QuoteLine`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid quote line {0:?}: expected ID or ID:QTY with QTY of at least 1")]
pub struct InvalidQuoteLine(String);

impl FromStr for QuoteLine {
    type Err = InvalidQuoteLine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidQuoteLine(s.to_string());
        let (id, quantity) = match s.split_once(':') {
            Some((id, qty)) => (id, qty.trim().parse().map_err(|_| invalid())?),
            None => (s, 1),
        };
        if quantity == 0 {
            return Err(invalid());
        }
        Ok(Self {
            product_id: id.parse().map_err(|_| invalid())?,
            quantity,
        })
    }
}

/// Build the cart a quote describes.
///
/// Lines for the same product merge, as they would in the storefront.
fn build_cart(catalog: &Catalog, lines: &[QuoteLine]) -> Result<Cart, CommandError> {
    let mut cart = Cart::new();
    for line in lines {
        let product = catalog
            .get(line.product_id)
            .ok_or(CommandError::ProductNotFound(line.product_id))?;
        cart.add(product, line.quantity, None, None);
    }
    Ok(cart)
}

/// Print the totals for an order of the given lines.
///
/// # Errors
///
/// Returns an error if a line names a product that does not exist.
pub fn quote(lines: &[QuoteLine]) -> Result<(), CommandError> {
    let catalog = Catalog::sample();
    let cart = build_cart(&catalog, lines)?;
    let totals = OrderTotals::for_items(cart.items());

    for item in cart.items() {
        info!(
            "{} x {} ({}, {}) {}",
            item.quantity,
            item.product.name,
            item.selected_color,
            item.selected_size,
            item.line_total()
        );
    }
    info!("Subtotal: {}", totals.subtotal);
    info!("Shipping: {}", totals.shipping);
    info!("Tax:      {}", totals.tax);
    info!("Total:    {}", totals.total);

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brightcart_core::Price;

    use super::*;

    #[test]
    fn test_parse_id_only() {
        let line: QuoteLine = "3".parse().unwrap();
        assert_eq!(line.product_id, ProductId::new(3));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_parse_id_and_quantity() {
        let line: QuoteLine = "1:4".parse().unwrap();
        assert_eq!(line.product_id, ProductId::new(1));
        assert_eq!(line.quantity, 4);
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert!("".parse::<QuoteLine>().is_err());
        assert!("x".parse::<QuoteLine>().is_err());
        assert!("1:".parse::<QuoteLine>().is_err());
        assert!("1:0".parse::<QuoteLine>().is_err());
        assert!("1:-2".parse::<QuoteLine>().is_err());
    }

    #[test]
    fn test_build_cart_merges_same_product() {
        let catalog = Catalog::sample();
        let lines: [QuoteLine; 3] = [
            "1:2".parse().unwrap(),
            "1".parse().unwrap(),
            "6".parse().unwrap(),
        ];
        let cart = build_cart(&catalog, &lines).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 4);
        // 3 x 89.99 + 149.99
        assert_eq!(cart.total(), Price::usd_cents(41996));
    }

    #[test]
    fn test_build_cart_unknown_product() {
        let catalog = Catalog::sample();
        let lines: [QuoteLine; 1] = ["42".parse().unwrap()];
        let result = build_cart(&catalog, &lines);
        assert!(matches!(result, Err(CommandError::ProductNotFound(_))));
    }

    #[test]
    fn test_quote_unknown_product_fails() {
        let lines: [QuoteLine; 1] = ["7:1".parse().unwrap()];
        assert!(quote(&lines).is_err());
    }
}
