//! The product catalog.
//!
//! The storefront sells from a fixed sample list; [`Catalog::sample`] builds
//! it. Products are immutable once loaded.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// Color used when a product has no color options.
pub const FALLBACK_COLOR: &str = "#4f46e5";

/// Size used when a product has no size options.
pub const FALLBACK_SIZE: &str = "M";

/// Color swatches offered on the detail view when a product has none of its own.
pub const DEFAULT_COLOR_OPTIONS: [&str; 4] = ["#4f46e5", "#ef4444", "#10b981", "#f59e0b"];

/// Sizes offered on the detail view when a product has none of its own.
pub const DEFAULT_SIZE_OPTIONS: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// Description shown when a product has none of its own.
pub const GENERIC_DESCRIPTION: &str = "Premium quality product crafted with attention to detail. \
     Perfect for everyday use with modern design and functionality.";

/// Stock images appended to every product's gallery.
const GALLERY_STOCK_IMAGES: [&str; 3] = [
    "photo-1488590528505-98d2b5aba04b",
    "photo-1581091226825-a6a2a5aee158",
    "photo-1531297484001-80022131f5a1",
];

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Accessories,
    Wearables,
    Computers,
    Photography,
    Audio,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Self; 6] = [
        Self::Electronics,
        Self::Accessories,
        Self::Wearables,
        Self::Computers,
        Self::Photography,
        Self::Audio,
    ];

    /// Display name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Accessories => "Accessories",
            Self::Wearables => "Wearables",
            Self::Computers => "Computers",
            Self::Photography => "Photography",
            Self::Audio => "Audio",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category filter applied to the catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }

    /// The filter bar: `All` followed by every category.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

/// Error parsing a [`CategoryFilter`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    /// Case-insensitive; `All` (or an empty string) means no filter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .map(Self::Only)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<Price>,
    /// Image reference (an Unsplash photo id).
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
    pub category: Category,
    pub description: Option<String>,
    /// Color options as hex codes. Empty when the product has none.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Size options. Empty when the product has none.
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// Color a new cart line gets when none was chosen.
    #[must_use]
    pub fn default_color(&self) -> &str {
        self.colors.first().map_or(FALLBACK_COLOR, String::as_str)
    }

    /// Size a new cart line gets when none was chosen.
    #[must_use]
    pub fn default_size(&self) -> &str {
        self.sizes.first().map_or(FALLBACK_SIZE, String::as_str)
    }

    /// Whether the product is marked down from an original price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .is_some_and(|original| original.amount > self.price.amount)
    }

    /// Discount off the original price in whole percent, rounded.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.amount <= self.price.amount || original.amount.is_zero() {
            return None;
        }
        let percent = ((original.amount - self.price.amount) / original.amount
            * Decimal::ONE_HUNDRED)
            .round();
        u32::try_from(percent.mantissa()).ok()
    }
}

/// Everything the product detail overlay shows beyond the product itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub color_options: Vec<String>,
    pub size_options: Vec<String>,
    pub description: String,
    pub discount_percent: Option<u32>,
    /// Image references for the gallery, product image first.
    pub gallery: Vec<String>,
    /// Initially selected color.
    pub selected_color: String,
    /// Initially selected size.
    pub selected_size: String,
    /// Initially selected quantity.
    pub quantity: u32,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        let color_options = if product.colors.is_empty() {
            DEFAULT_COLOR_OPTIONS.map(String::from).to_vec()
        } else {
            product.colors.clone()
        };
        let size_options = if product.sizes.is_empty() {
            DEFAULT_SIZE_OPTIONS.map(String::from).to_vec()
        } else {
            product.sizes.clone()
        };
        let gallery = std::iter::once(product.image.clone())
            .chain(GALLERY_STOCK_IMAGES.iter().map(|img| (*img).to_string()))
            .collect();

        Self {
            color_options,
            size_options,
            description: product
                .description
                .clone()
                .unwrap_or_else(|| GENERIC_DESCRIPTION.to_string()),
            discount_percent: product.discount_percent(),
            gallery,
            selected_color: product.default_color().to_string(),
            selected_size: product.default_size().to_string(),
            quantity: 1,
            product: product.clone(),
        }
    }
}

/// The product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The six-product sample catalog the storefront ships with.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            sample_product(SampleProduct {
                id: 1,
                name: "Premium Laptop Backpack",
                price_cents: 8999,
                original_cents: Some(11999),
                image: "photo-1649972904349-6e44c42644a7",
                rating: 4.5,
                reviews: 124,
                category: Category::Accessories,
                description: "A premium laptop backpack with multiple compartments and water-resistant material.",
                colors: &["#1f2937", "#7c3aed", "#dc2626"],
                sizes: &["S", "M", "L"],
            }),
            sample_product(SampleProduct {
                id: 2,
                name: "Wireless Noise-Canceling Headphones",
                price_cents: 29999,
                original_cents: None,
                image: "photo-1488590528505-98d2b5aba04b",
                rating: 4.8,
                reviews: 89,
                category: Category::Electronics,
                description: "Premium wireless headphones with active noise cancellation and 30-hour battery life.",
                colors: &["#000000", "#ffffff", "#3b82f6"],
                sizes: &["One Size"],
            }),
            sample_product(SampleProduct {
                id: 3,
                name: "Smart Fitness Watch",
                price_cents: 19999,
                original_cents: Some(24999),
                image: "photo-1581091226825-a6a2a5aee158",
                rating: 4.3,
                reviews: 156,
                category: Category::Wearables,
                description: "Advanced fitness tracking with heart rate monitoring and GPS.",
                colors: &["#374151", "#f59e0b", "#ef4444"],
                sizes: &["38mm", "42mm"],
            }),
            sample_product(SampleProduct {
                id: 4,
                name: "Ultrabook Pro 15\"",
                price_cents: 129_999,
                original_cents: None,
                image: "photo-1531297484001-80022131f5a1",
                rating: 4.9,
                reviews: 67,
                category: Category::Computers,
                description: "High-performance ultrabook with 16GB RAM and 512GB SSD.",
                colors: &["#6b7280", "#1f2937"],
                sizes: &["13\"", "15\""],
            }),
            sample_product(SampleProduct {
                id: 5,
                name: "Professional Camera",
                price_cents: 79999,
                original_cents: None,
                image: "photo-1486312338219-ce68d2c6f44d",
                rating: 4.6,
                reviews: 203,
                category: Category::Photography,
                description: "Mirrorless camera with 24MP sensor and 4K video recording.",
                colors: &["#000000", "#6b7280"],
                sizes: &["Body Only", "With Lens"],
            }),
            sample_product(SampleProduct {
                id: 6,
                name: "Bluetooth Speaker",
                price_cents: 14999,
                original_cents: Some(19999),
                image: "photo-1618160702438-9b02ab6515c9",
                rating: 4.4,
                reviews: 98,
                category: Category::Audio,
                description: "Portable Bluetooth speaker with 360-degree sound and waterproof design.",
                colors: &["#dc2626", "#2563eb", "#059669"],
                sizes: &["Compact", "Standard"],
            }),
        ])
    }

    /// All products in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products passing the category filter, in listing order.
    #[must_use]
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

struct SampleProduct {
    id: u32,
    name: &'static str,
    price_cents: i64,
    original_cents: Option<i64>,
    image: &'static str,
    rating: f32,
    reviews: u32,
    category: Category,
    description: &'static str,
    colors: &'static [&'static str],
    sizes: &'static [&'static str],
}

fn sample_product(p: SampleProduct) -> Product {
    Product {
        id: ProductId::new(p.id),
        name: p.name.to_string(),
        price: Price::usd_cents(p.price_cents),
        original_price: p.original_cents.map(Price::usd_cents),
        image: p.image.to_string(),
        rating: p.rating,
        reviews: p.reviews,
        category: p.category,
        description: Some(p.description.to_string()),
        colors: p.colors.iter().map(|c| (*c).to_string()).collect(),
        sizes: p.sizes.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    /// A product with no color or size options.
    pub(crate) fn plain_product(id: u32, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Plain {id}"),
            price: Price::usd_cents(price_cents),
            original_price: None,
            image: "photo-plain".to_string(),
            rating: 4.0,
            reviews: 1,
            category: Category::Accessories,
            description: None,
            colors: Vec::new(),
            sizes: Vec::new(),
        }
    }

    #[test]
    fn test_sample_catalog_has_six_products() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.filter(CategoryFilter::All).len(), 6);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::sample();
        let audio = catalog.filter(CategoryFilter::Only(Category::Audio));
        assert_eq!(audio.len(), 1);
        assert_eq!(audio[0].name, "Bluetooth Speaker");
    }

    #[test]
    fn test_category_filter_options_order() {
        let names: Vec<String> = CategoryFilter::options()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            names,
            vec![
                "All",
                "Electronics",
                "Accessories",
                "Wearables",
                "Computers",
                "Photography",
                "Audio"
            ]
        );
    }

    #[test]
    fn test_category_filter_from_str() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "photography".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Photography))
        );
        assert!("Groceries".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_get_unknown_product() {
        assert!(Catalog::sample().get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_default_options() {
        let catalog = Catalog::sample();
        let backpack = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(backpack.default_color(), "#1f2937");
        assert_eq!(backpack.default_size(), "S");

        let plain = plain_product(10, 100);
        assert_eq!(plain.default_color(), FALLBACK_COLOR);
        assert_eq!(plain.default_size(), FALLBACK_SIZE);
    }

    #[test]
    fn test_discount_percent() {
        let catalog = Catalog::sample();
        // 89.99 off 119.99 is 25%
        assert_eq!(
            catalog.get(ProductId::new(1)).unwrap().discount_percent(),
            Some(25)
        );
        assert!(catalog.get(ProductId::new(1)).unwrap().is_on_sale());
        assert_eq!(
            catalog.get(ProductId::new(2)).unwrap().discount_percent(),
            None
        );
    }

    #[test]
    fn test_detail_falls_back_for_missing_options() {
        let detail = ProductDetail::from(&plain_product(10, 100));
        assert_eq!(detail.color_options.len(), 4);
        assert_eq!(detail.size_options, vec!["XS", "S", "M", "L", "XL"]);
        assert_eq!(detail.description, GENERIC_DESCRIPTION);
        assert_eq!(detail.selected_color, FALLBACK_COLOR);
        assert_eq!(detail.selected_size, FALLBACK_SIZE);
        assert_eq!(detail.quantity, 1);
    }

    #[test]
    fn test_detail_gallery_starts_with_product_image() {
        let catalog = Catalog::sample();
        let detail = ProductDetail::from(catalog.get(ProductId::new(5)).unwrap());
        assert_eq!(detail.gallery.len(), 4);
        assert_eq!(detail.gallery[0], "photo-1486312338219-ce68d2c6f44d");
        assert_eq!(detail.selected_size, "Body Only");
    }
}
