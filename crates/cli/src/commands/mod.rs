//! CLI command implementations.

pub mod catalog;
pub mod quote;

use thiserror::Error;

use brightcart_core::{ProductId, catalog::UnknownCategory};

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("product {0} not found")]
    ProductNotFound(ProductId),
}
