//! BrightCart Core - storefront domain library.
//!
//! This crate holds everything the storefront knows about selling things:
//! - [`catalog`] - The static sample catalog, category filter and product detail data
//! - [`cart`] - The cart state holder (line items keyed by product + variant)
//! - [`checkout`] - Totals derivation and order placement
//! - [`order`] - Placed orders and the tracking view
//!
//! # Architecture
//!
//! Like any core crate it contains only types and pure functions - no I/O,
//! no sessions, no HTTP. The storefront binary keeps one [`Cart`] per browser
//! session and calls into this crate for every state change.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, emails and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod order;
pub mod types;

pub use cart::{Cart, CartItem, LineKey, MAX_LINE_QUANTITY};
pub use catalog::{Catalog, Category, CategoryFilter, Product, ProductDetail};
pub use checkout::{CheckoutError, CheckoutForm, Customer, OrderTotals, place_order};
pub use order::{Order, OrderNumber, OrderTracking, TrackingStep};
pub use types::*;
