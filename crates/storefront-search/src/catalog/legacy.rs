//! Adapter for the Thai-keyed product payload.
//!
//! Older deployments of the search service name product fields in Thai and
//! send every number as a display string. This is the only place that knows
//! about that shape; it converts straight into [`Product`].

use crate::catalog::{numeric, Product};
use crate::ids::ProductId;
use serde::Deserialize;

/// A product as sent by the legacy service.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyProduct {
    pub id: ProductId,
    #[serde(rename = "ชื่อสินค้า")]
    pub name: String,
    #[serde(rename = "หมวดหมู่", default)]
    pub category: String,
    #[serde(rename = "รูปสินค้า", default)]
    pub image: String,
    #[serde(rename = "คำอธิบายสินค้า", default)]
    pub detail: String,
    #[serde(rename = "ราคาเดิม", deserialize_with = "numeric::whole")]
    pub original_price: i64,
    #[serde(rename = "ราคาปัจจุบัน", deserialize_with = "numeric::whole")]
    pub current_price: i64,
    #[serde(rename = "ส่วนลด", default, deserialize_with = "numeric::whole_or_zero")]
    pub discount: i64,
    #[serde(default, deserialize_with = "numeric::count")]
    pub views: u64,
}

impl From<LegacyProduct> for Product {
    fn from(p: LegacyProduct) -> Self {
        Product {
            id: p.id,
            name: p.name,
            detail: p.detail,
            brand: String::new(),
            category: p.category,
            image: p.image,
            link: String::new(),
            warranty: String::new(),
            price: p.original_price,
            sellprice: p.current_price,
            discount: p.discount,
            views: p.views,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_product_converts() {
        let raw = r#"{
            "id": 12,
            "ชื่อสินค้า": "NOTEBOOK LENOVO IDEAPAD SLIM 3",
            "หมวดหมู่": "Notebook",
            "รูปสินค้า": "https://www.jib.co.th/img_master/product/original/1.jpg",
            "คำอธิบายสินค้า": "Ryzen 5 7520U / 16GB / 512GB",
            "ราคาเดิม": "18,990",
            "ราคาปัจจุบัน": "16,990",
            "ส่วนลด": "11%",
            "views": "1520"
        }"#;

        let product: Product = serde_json::from_str::<LegacyProduct>(raw).unwrap().into();
        assert_eq!(product.name, "NOTEBOOK LENOVO IDEAPAD SLIM 3");
        assert_eq!(product.category, "Notebook");
        assert_eq!(product.price, 18990);
        assert_eq!(product.sellprice, 16990);
        assert_eq!(product.discount, 11);
        assert_eq!(product.views, 1520);
        assert_eq!(product.brand, "");
    }

    #[test]
    fn test_legacy_unparsable_price_is_error() {
        let raw = r#"{"id": 1, "ชื่อสินค้า": "x", "ราคาเดิม": "สอบถาม", "ราคาปัจจุบัน": "1"}"#;
        assert!(serde_json::from_str::<LegacyProduct>(raw).is_err());
    }
}
