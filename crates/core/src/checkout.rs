//! Checkout: totals derivation and order placement.

use chrono::{DateTime, Days, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartItem};
use crate::order::{Order, OrderNumber};
use crate::types::{Email, EmailError, OrderStatus, Price};

/// Flat shipping fee charged on every order (9.99).
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(999, 0, 0, false, 2);

/// Sales tax rate applied to the subtotal (8%).
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Days from placement to the estimated delivery date.
pub const DELIVERY_ESTIMATE_DAYS: u64 = 7;

/// Reasons a checkout submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A required form field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The email field is not an email address.
    #[error("invalid email: {0}")]
    InvalidEmail(String),
    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,
}

impl From<EmailError> for CheckoutError {
    fn from(err: EmailError) -> Self {
        Self::InvalidEmail(err.to_string())
    }
}

/// Derived order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub tax: Price,
    pub total: Price,
}

impl OrderTotals {
    /// Totals for a set of line items.
    ///
    /// Shipping is charged even when there are no items, matching the
    /// order summary shown on an empty checkout page.
    #[must_use]
    pub fn for_items(items: &[CartItem]) -> Self {
        let subtotal: Price = items.iter().map(CartItem::line_total).sum();
        Self::from_subtotal(subtotal)
    }

    /// Totals for a given subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Price) -> Self {
        let shipping = Price::new(SHIPPING_FEE, subtotal.currency_code);
        let tax = subtotal.apply_rate(TAX_RATE);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// Shipping and payment details as submitted on the checkout form.
///
/// Every field except `country` is required; absent fields deserialize as
/// blank so [`CheckoutForm::validate`] can name them. `Debug` redacts card
/// data.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: Option<String>,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_name: String,
}

impl std::fmt::Debug for CheckoutForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutForm")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("address", &self.address)
            .field("city", &self.city)
            .field("postal_code", &self.postal_code)
            .field("country", &self.country)
            .field("card_number", &"[REDACTED]")
            .field("expiry_date", &"[REDACTED]")
            .field("cvv", &"[REDACTED]")
            .field("card_name", &self.card_name)
            .finish()
    }
}

impl CheckoutForm {
    /// Check required fields and the email shape, producing the customer
    /// record stored on the order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] for the first blank required
    /// field (in form order) and [`CheckoutError::InvalidEmail`] for a
    /// malformed email.
    pub fn validate(&self) -> Result<Customer, CheckoutError> {
        let required = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("postal_code", &self.postal_code),
            ("card_name", &self.card_name),
            ("card_number", &self.card_number),
            ("expiry_date", &self.expiry_date),
            ("cvv", &self.cvv),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CheckoutError::MissingField(*field));
        }

        let email = Email::parse(&self.email)?;

        Ok(Customer {
            email,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            postal_code: self.postal_code.trim().to_string(),
            country: self
                .country
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
            card_last4: card_last4(&self.card_number),
            card_name: self.card_name.trim().to_string(),
        })
    }
}

/// Last four digits of a card number, ignoring spaces and dashes.
fn card_last4(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(char::is_ascii_digit).collect();
    let start = digits.len().saturating_sub(4);
    digits.get(start..).unwrap_or_default().iter().collect()
}

/// Customer details kept on a placed order.
///
/// Only the last four card digits survive; the CVV and expiry are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: Option<String>,
    pub card_last4: String,
    pub card_name: String,
}

impl Customer {
    /// First and last name joined.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Place an order for the cart's contents.
///
/// On success the cart is emptied and the returned order holds a snapshot
/// of its lines. On failure the cart is untouched.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to order, or a
/// validation error from [`CheckoutForm::validate`].
pub fn place_order(
    cart: &mut Cart,
    form: &CheckoutForm,
    placed_at: DateTime<Utc>,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let customer = form.validate()?;

    let totals = OrderTotals::for_items(cart.items());
    let items = cart.take();
    let estimated_delivery = (placed_at + Days::new(DELIVERY_ESTIMATE_DAYS)).date_naive();

    Ok(Order {
        id: OrderNumber::from_timestamp(placed_at),
        items,
        customer,
        totals,
        status: OrderStatus::Processing,
        placed_at,
        estimated_delivery,
    })
}
