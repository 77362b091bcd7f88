//! Type-safe price representation using decimal arithmetic.
//!
//! Every amount in the storefront goes through [`Price`] so that cart and
//! checkout sums are exact: `89.99 * 3` is `269.97`, not a float
//! approximation of it.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Arithmetic between prices assumes a single currency; the sample catalog
/// is priced entirely in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Zero in the default currency.
    pub const ZERO: Self = Self::new(Decimal::ZERO, CurrencyCode::USD);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from a whole number of cents.
    #[must_use]
    pub fn usd_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2), CurrencyCode::USD)
    }

    /// Multiply by a decimal rate and round to cents (midpoint away from zero).
    #[must_use]
    pub fn apply_rate(self, rate: Decimal) -> Self {
        let amount = (self.amount * rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self::new(amount, self.currency_code)
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.currency_code, rhs.currency_code, "mixed currencies");
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, price| {
            if acc.is_zero() {
                Self::new(acc.amount + price.amount, price.currency_code)
            } else {
                acc + price
            }
        })
    }
}

/// Formats as the storefront displays prices, e.g. `$19.99`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{}{:.2}", self.currency_code.symbol(), amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::usd_cents(1999).to_string(), "$19.99");
        assert_eq!(Price::usd_cents(1000).to_string(), "$10.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_mul_is_exact() {
        assert_eq!(Price::usd_cents(8999) * 3, Price::usd_cents(26997));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::usd_cents(1), Price::usd_cents(2), Price::usd_cents(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::usd_cents(6));

        let empty: Price = core::iter::empty().sum();
        assert_eq!(empty, Price::ZERO);
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // 0.08 * 0.0625 = 0.005 -> 0.01
        let price = Price::new(Decimal::new(625, 4), CurrencyCode::USD);
        assert_eq!(price.apply_rate(Decimal::new(8, 2)), Price::usd_cents(1));
    }

    #[test]
    fn test_serializes_amount_as_string() {
        let json = serde_json::to_value(Price::usd_cents(8999)).unwrap_or_default();
        assert_eq!(json["amount"], "89.99");
        assert_eq!(json["currency_code"], "USD");
    }
}
