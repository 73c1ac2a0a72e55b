//! Product type returned by the search service.

use crate::catalog::numeric;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in a search result.
///
/// Immutable once decoded: presentation code only ever reads it. `price` is
/// the list price and `sellprice` the current one; the service guarantees
/// `sellprice <= price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description shown under the name.
    #[serde(default)]
    pub detail: String,
    /// Manufacturer.
    #[serde(default)]
    pub brand: String,
    /// Category label shown as a badge.
    #[serde(default)]
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Product detail page URL.
    #[serde(default)]
    pub link: String,
    /// Warranty text, e.g. "3 ปี".
    #[serde(default)]
    pub warranty: String,
    /// Original (list) price in baht.
    #[serde(deserialize_with = "numeric::whole")]
    pub price: i64,
    /// Current selling price in baht.
    #[serde(deserialize_with = "numeric::whole")]
    pub sellprice: i64,
    /// Markdown percentage; 0 means no markdown.
    #[serde(default, deserialize_with = "numeric::whole_or_zero")]
    pub discount: i64,
    /// Page views.
    #[serde(default, deserialize_with = "numeric::count")]
    pub views: u64,
}

impl Product {
    /// Create a product with the given prices and no markdown.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            detail: String::new(),
            brand: String::new(),
            category: String::new(),
            image: String::new(),
            link: String::new(),
            warranty: String::new(),
            price,
            sellprice: price,
            discount: 0,
            views: 0,
        }
    }

    /// Set the current price and markdown percentage.
    pub fn with_sale(mut self, sellprice: i64, discount: i64) -> Self {
        self.sellprice = sellprice;
        self.discount = discount;
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the description.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Set the page view count.
    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    /// List price.
    pub fn list_price(&self) -> Money {
        Money::baht(self.price)
    }

    /// Current selling price.
    pub fn sell_price(&self) -> Money {
        Money::baht(self.sellprice)
    }

    /// Whether a markdown percentage is advertised.
    pub fn is_discounted(&self) -> bool {
        self.discount > 0
    }

    /// Whether the list price differs from the selling price.
    pub fn has_markdown(&self) -> bool {
        self.price != self.sellprice
    }

    /// Amount saved against the list price, when positive.
    pub fn savings(&self) -> Option<Money> {
        Some(self.list_price() - self.sell_price()).filter(Money::is_positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_with_defaults() {
        let product: Product = serde_json::from_str(
            r#"{"id": 7, "name": "ASUS TUF A15", "price": 32990, "sellprice": 29990}"#,
        )
        .unwrap();

        assert_eq!(product.id, ProductId::from(7));
        assert_eq!(product.brand, "");
        assert_eq!(product.discount, 0);
        assert_eq!(product.views, 0);
        assert!(product.has_markdown());
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let result = serde_json::from_str::<Product>(r#"{"id": 1, "name": "x", "sellprice": 5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_savings_only_when_positive() {
        let full = Product::new(1, "Mouse", 1000);
        assert_eq!(full.savings(), None);
        assert!(!full.has_markdown());

        let marked = Product::new(2, "Keyboard", 1200).with_sale(1000, 17);
        assert_eq!(marked.savings(), Some(Money::baht(200)));
        assert!(marked.has_markdown());
        assert!(marked.is_discounted());
    }
}
