//! Status enums for orders.

use serde::{Deserialize, Serialize};

/// Order status as shown on the tracking view.
///
/// Orders are created as `Processing` and never transition afterwards; the
/// later variants exist so the badge color mapping covers every label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Capitalized label, e.g. `Processing`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
        }
    }

    /// Badge color for the status label.
    #[must_use]
    pub const fn badge_color(self) -> BadgeColor {
        match self {
            Self::Processing => BadgeColor::Blue,
            Self::Shipped => BadgeColor::Orange,
            Self::Delivered => BadgeColor::Green,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Color of a status badge.
///
/// Unknown statuses fall back to `Gray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Blue,
    Orange,
    Green,
    #[default]
    Gray,
}

impl BadgeColor {
    /// Badge color for a raw status string.
    #[must_use]
    pub fn for_status(status: &str) -> Self {
        status
            .parse::<OrderStatus>()
            .map_or(Self::Gray, OrderStatus::badge_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_display() {
        for status in [
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_badge_color_for_unknown_status_is_gray() {
        assert_eq!(BadgeColor::for_status("processing"), BadgeColor::Blue);
        assert_eq!(BadgeColor::for_status("shipped"), BadgeColor::Orange);
        assert_eq!(BadgeColor::for_status("delivered"), BadgeColor::Green);
        assert_eq!(BadgeColor::for_status("cancelled"), BadgeColor::Gray);
    }

    #[test]
    fn test_label_is_capitalized() {
        assert_eq!(OrderStatus::Processing.label(), "Processing");
    }
}
