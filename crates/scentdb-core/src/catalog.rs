//! Catalog records emitted by a crawl, shaped as flat rows for seeding a
//! relational store.
//!
//! Every row is appended once and never updated. Optional fields serialize as
//! JSON `null` so each document carries the same keys on every object.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    /// Heading text of the brand page; `None` when the page could not be read.
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    /// Set for product gallery images, `None` for brand logos.
    pub product_id: Option<i64>,
    /// Reserved; the crawler never assigns category images.
    pub category_id: Option<i64>,
    /// Set for brand logos, `None` for product images.
    pub brand_id: Option<i64>,
    /// Absolute URL of the image.
    pub path: String,
    /// Primary image of its product or brand.
    pub main: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    /// Slug of `"{name} p.{id}"`, unique even when two brands share a product name.
    pub slug: String,
    /// Raw inner HTML of the product description block.
    pub description: Option<String>,
    pub brand_id: i64,
    pub concentration_id: i64,
    /// Distinct category ids, in sampling order.
    pub categories: Vec<i64>,
}

/// Row of the deduplicated size dimension table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub id: i64,
    /// Canonical label such as `"50 ml"`.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub id: i64,
    pub product_id: i64,
    pub size_id: i64,
    /// Synthetic stock count.
    pub quantity: u32,
    /// Synthetic price.
    pub price: f64,
}

/// Reference row from the concentration table (e.g. `"Eau de Parfum"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concentration {
    pub id: i64,
    pub name: String,
}

/// The five output collections of one crawl.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDataset {
    pub brands: Vec<Brand>,
    pub images: Vec<Image>,
    pub products: Vec<Product>,
    pub sizes: Vec<Size>,
    pub quantities: Vec<Quantity>,
}

impl CatalogDataset {
    /// Returns `true` when no collection holds a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
            && self.images.is_empty()
            && self.products.is_empty()
            && self.sizes.is_empty()
            && self.quantities.is_empty()
    }

    /// Quantity rows belonging to `product_id`, in emission order.
    pub fn quantities_for(&self, product_id: i64) -> impl Iterator<Item = &Quantity> {
        self.quantities
            .iter()
            .filter(move |q| q.product_id == product_id)
    }

    /// Images belonging to `product_id`, in emission order.
    pub fn images_for_product(&self, product_id: i64) -> impl Iterator<Item = &Image> {
        self.images
            .iter()
            .filter(move |i| i.product_id == Some(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_serializes_absent_keys_as_null() {
        let image = Image {
            id: 1000,
            product_id: None,
            category_id: None,
            brand_id: Some(1000),
            path: "https://cdn.example.com/logo.png".to_string(),
            main: true,
        };
        let value = serde_json::to_value(&image).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1000,
                "product_id": null,
                "category_id": null,
                "brand_id": 1000,
                "path": "https://cdn.example.com/logo.png",
                "main": true
            })
        );
    }

    #[test]
    fn product_categories_serialize_as_array() {
        let product = Product {
            id: 1000,
            name: Some("Light Blue EDT 100ml".to_string()),
            slug: "light-blue-edt-100ml-p-1000".to_string(),
            description: None,
            brand_id: 1000,
            concentration_id: 51,
            categories: vec![104, 100],
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["categories"], serde_json::json!([104, 100]));
        assert_eq!(value["description"], serde_json::Value::Null);
    }

    #[test]
    fn dataset_filters_rows_by_product() {
        let mut dataset = CatalogDataset::default();
        assert!(dataset.is_empty());
        dataset.quantities.push(Quantity {
            id: 100,
            product_id: 1000,
            size_id: 100,
            quantity: 5,
            price: 120.5,
        });
        dataset.quantities.push(Quantity {
            id: 101,
            product_id: 1001,
            size_id: 100,
            quantity: 7,
            price: 99.0,
        });
        assert!(!dataset.is_empty());
        assert_eq!(dataset.quantities_for(1000).count(), 1);
        assert_eq!(dataset.images_for_product(1000).count(), 0);
    }
}
