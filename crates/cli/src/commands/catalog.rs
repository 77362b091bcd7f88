//! Catalog listing commands.

use tracing::info;

use brightcart_core::{Catalog, CategoryFilter, ProductDetail, ProductId};

use super::CommandError;

/// List the sample catalog, filtered by category name.
///
/// # Errors
///
/// Returns an error if the category name is not recognized.
pub fn list(category: &str) -> Result<(), CommandError> {
    let filter: CategoryFilter = category.parse()?;
    let catalog = Catalog::sample();
    let products = catalog.filter(filter);

    info!(category = %filter, count = products.len(), "Listing products");
    for product in products {
        match product.original_price {
            Some(original) if product.is_on_sale() => info!(
                "#{} {} ({}) {} was {}",
                product.id, product.name, product.category, product.price, original
            ),
            _ => info!(
                "#{} {} ({}) {}",
                product.id, product.name, product.category, product.price
            ),
        }
    }

    Ok(())
}

/// Show one product's detail view.
///
/// # Errors
///
/// Returns an error if no product has the given ID.
pub fn show(id: ProductId) -> Result<(), CommandError> {
    let catalog = Catalog::sample();
    let product = catalog.get(id).ok_or(CommandError::ProductNotFound(id))?;
    let detail = ProductDetail::from(product);

    info!("#{} {}", product.id, product.name);
    info!("  Price:       {}", product.price);
    if let Some(percent) = detail.discount_percent {
        info!("  Discount:    {percent}% off");
    }
    info!(
        "  Rating:      {:.1} ({} reviews)",
        product.rating, product.reviews
    );
    info!("  Colors:      {}", detail.color_options.join(", "));
    info!("  Sizes:       {}", detail.size_options.join(", "));
    info!("  {}", detail.description);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_rejects_unknown_category() {
        let result = list("garden");
        assert!(matches!(result, Err(CommandError::UnknownCategory(_))));
    }

    #[test]
    fn test_list_accepts_any_case() {
        assert!(list("AUDIO").is_ok());
        assert!(list("all").is_ok());
    }

    #[test]
    fn test_show_unknown_product() {
        let result = show(ProductId::new(99));
        assert!(matches!(result, Err(CommandError::ProductNotFound(id)) if id.as_u32() == 99));
    }
}
