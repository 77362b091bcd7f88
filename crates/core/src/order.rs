//! Placed orders and the order tracking view.

use core::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::checkout::{Customer, OrderTotals};
use crate::types::{BadgeColor, OrderStatus};

/// Time-based order identifier, `ORDER-<unix millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Order number for an order placed at `placed_at`.
    #[must_use]
    pub fn from_timestamp(placed_at: DateTime<Utc>) -> Self {
        Self(format!("ORDER-{}", placed_at.timestamp_millis()))
    }

    /// Returns the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A placed order. Never mutated after checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderNumber,
    /// Snapshot of the cart lines at submission.
    pub items: Vec<CartItem>,
    pub customer: Customer,
    pub totals: OrderTotals,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: NaiveDate,
}

impl Order {
    /// Total units ordered.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Estimated delivery in `M/D/YYYY` form.
    #[must_use]
    pub fn estimated_delivery_display(&self) -> String {
        self.estimated_delivery.format("%-m/%-d/%Y").to_string()
    }
}

/// One step of the tracking progress display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingStep {
    pub id: &'static str,
    pub label: &'static str,
    pub completed: bool,
    pub date: String,
}

/// The order tracking view.
///
/// The progress list is fixed: confirmed and processing are always shown as
/// complete, shipped and delivered never are. Only the delivered step's date
/// comes from the order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTracking {
    pub order: Order,
    pub status_label: &'static str,
    pub badge_color: BadgeColor,
    pub steps: [TrackingStep; 4],
}

impl OrderTracking {
    /// Build the tracking view for an order.
    #[must_use]
    pub fn new(order: Order) -> Self {
        let steps = [
            TrackingStep {
                id: "confirmed",
                label: "Order Confirmed",
                completed: true,
                date: "Today, 2:30 PM".to_string(),
            },
            TrackingStep {
                id: "processing",
                label: "Processing",
                completed: true,
                date: "Today, 3:15 PM".to_string(),
            },
            TrackingStep {
                id: "shipped",
                label: "Shipped",
                completed: false,
                date: "Tomorrow, 10:00 AM".to_string(),
            },
            TrackingStep {
                id: "delivered",
                label: "Delivered",
                completed: false,
                date: order.estimated_delivery_display(),
            },
        ];

        Self {
            status_label: order.status.label(),
            badge_color: order.status.badge_color(),
            steps,
            order,
        }
    }

    /// Number of steps shown as complete.
    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }
}
