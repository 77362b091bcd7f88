//! Product route handlers.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use brightcart_core::{CategoryFilter, Product, ProductDetail, ProductId};

use crate::error::{AppError, Result};
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

/// Product card data for the listing grid.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
    pub category: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            original_price: product.original_price.map(|price| price.to_string()),
            discount_percent: product.discount_percent(),
            image: product.image.clone(),
            rating: product.rating,
            reviews: product.reviews,
            category: product.category.to_string(),
        }
    }
}

/// Product listing response.
#[derive(Debug, Clone, Serialize)]
pub struct ProductsIndexView {
    /// The active category filter.
    pub category: String,
    pub count: usize,
    pub products: Vec<ProductCardView>,
}

/// Category filter query parameters.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// List products, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<ProductsIndexView>> {
    let filter = query
        .category
        .as_deref()
        .unwrap_or_default()
        .parse::<CategoryFilter>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let products: Vec<ProductCardView> = state
        .catalog()
        .filter(filter)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    tracing::debug!(category = %filter, count = products.len(), "Listed products");

    Ok(Json(ProductsIndexView {
        category: filter.to_string(),
        count: products.len(),
        products,
    }))
}

/// The category filter bar.
pub async fn categories() -> Json<Vec<String>> {
    Json(
        CategoryFilter::options()
            .iter()
            .map(ToString::to_string)
            .collect(),
    )
}

/// Product detail overlay.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductDetail>> {
    let product = state
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ProductDetail::from(product)))
}
