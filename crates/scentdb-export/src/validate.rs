//! Structural checks over a finished dataset.
//!
//! A crawl never produces these violations on its own; the checks exist so a
//! directory of JSON documents can be verified before it is loaded into a
//! relational store.

use std::collections::HashSet;

use scentdb_core::CatalogDataset;
use thiserror::Error;

const MAX_CATEGORIES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{collection}: id {id} does not increase over the previous row")]
    IdOutOfOrder { collection: &'static str, id: i64 },

    #[error("{collection} {id}: {field} references missing {target} {value}")]
    DanglingReference {
        collection: &'static str,
        id: i64,
        field: &'static str,
        target: &'static str,
        value: i64,
    },

    #[error("image {id} must belong to exactly one product or brand")]
    ImageOwner { id: i64 },

    #[error("size name {name:?} appears more than once")]
    DuplicateSizeName { name: String },

    #[error("product {id} has {count} categories, expected 1 to 5")]
    CategoryCount { id: i64, count: usize },

    #[error("product {id} lists category {category} twice")]
    DuplicateCategory { id: i64, category: i64 },

    #[error("product {id} has no quantity rows")]
    MissingQuantity { id: i64 },

    #[error("{owner} {id} has {count} primary images")]
    PrimaryImageCount {
        owner: &'static str,
        id: i64,
        count: usize,
    },
}

/// Returns every violation found in `dataset`, in collection order. An empty
/// result means the dataset is safe to load.
#[must_use]
pub fn validate_dataset(dataset: &CatalogDataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_order("brands", dataset.brands.iter().map(|b| b.id), &mut violations);
    check_order("images", dataset.images.iter().map(|i| i.id), &mut violations);
    check_order("products", dataset.products.iter().map(|p| p.id), &mut violations);
    check_order("sizes", dataset.sizes.iter().map(|s| s.id), &mut violations);
    check_order(
        "quantities",
        dataset.quantities.iter().map(|q| q.id),
        &mut violations,
    );

    let keys = Keys {
        brands: dataset.brands.iter().map(|b| b.id).collect(),
        products: dataset.products.iter().map(|p| p.id).collect(),
        sizes: dataset.sizes.iter().map(|s| s.id).collect(),
    };

    check_size_names(dataset, &mut violations);
    check_products(dataset, &keys, &mut violations);
    check_brand_logos(dataset, &mut violations);
    check_quantities(dataset, &keys, &mut violations);
    check_images(dataset, &keys, &mut violations);

    violations
}

/// Primary keys present in the dataset.
struct Keys {
    brands: HashSet<i64>,
    products: HashSet<i64>,
    sizes: HashSet<i64>,
}

fn dangling(
    collection: &'static str,
    id: i64,
    field: &'static str,
    target: &'static str,
    value: i64,
) -> Violation {
    Violation::DanglingReference {
        collection,
        id,
        field,
        target,
        value,
    }
}

fn check_size_names(dataset: &CatalogDataset, violations: &mut Vec<Violation>) {
    let mut seen = HashSet::new();
    for size in &dataset.sizes {
        if !seen.insert(size.name.as_str()) {
            violations.push(Violation::DuplicateSizeName {
                name: size.name.clone(),
            });
        }
    }
}

fn check_products(dataset: &CatalogDataset, keys: &Keys, violations: &mut Vec<Violation>) {
    for product in &dataset.products {
        if !keys.brands.contains(&product.brand_id) {
            violations.push(dangling(
                "product",
                product.id,
                "brand_id",
                "brand",
                product.brand_id,
            ));
        }

        let count = product.categories.len();
        if count == 0 || count > MAX_CATEGORIES {
            violations.push(Violation::CategoryCount {
                id: product.id,
                count,
            });
        }
        let mut seen = HashSet::new();
        for &category in &product.categories {
            if !seen.insert(category) {
                violations.push(Violation::DuplicateCategory {
                    id: product.id,
                    category,
                });
            }
        }

        if dataset.quantities_for(product.id).next().is_none() {
            violations.push(Violation::MissingQuantity { id: product.id });
        }

        let images = dataset.images_for_product(product.id).count();
        let primary = dataset
            .images_for_product(product.id)
            .filter(|i| i.main)
            .count();
        if images > 0 && primary != 1 {
            violations.push(Violation::PrimaryImageCount {
                owner: "product",
                id: product.id,
                count: primary,
            });
        }
    }
}

fn check_brand_logos(dataset: &CatalogDataset, violations: &mut Vec<Violation>) {
    for brand in &dataset.brands {
        let primary = dataset
            .images
            .iter()
            .filter(|i| i.brand_id == Some(brand.id) && i.main)
            .count();
        if primary > 1 {
            violations.push(Violation::PrimaryImageCount {
                owner: "brand",
                id: brand.id,
                count: primary,
            });
        }
    }
}

fn check_quantities(dataset: &CatalogDataset, keys: &Keys, violations: &mut Vec<Violation>) {
    for quantity in &dataset.quantities {
        if !keys.products.contains(&quantity.product_id) {
            violations.push(dangling(
                "quantity",
                quantity.id,
                "product_id",
                "product",
                quantity.product_id,
            ));
        }
        if !keys.sizes.contains(&quantity.size_id) {
            violations.push(dangling(
                "quantity",
                quantity.id,
                "size_id",
                "size",
                quantity.size_id,
            ));
        }
    }
}

fn check_images(dataset: &CatalogDataset, keys: &Keys, violations: &mut Vec<Violation>) {
    for image in &dataset.images {
        match (image.product_id, image.brand_id) {
            (Some(product_id), None) => {
                if !keys.products.contains(&product_id) {
                    violations.push(dangling("image", image.id, "product_id", "product", product_id));
                }
            }
            (None, Some(brand_id)) => {
                if !keys.brands.contains(&brand_id) {
                    violations.push(dangling("image", image.id, "brand_id", "brand", brand_id));
                }
            }
            _ => violations.push(Violation::ImageOwner { id: image.id }),
        }
    }
}

fn check_order(
    collection: &'static str,
    ids: impl Iterator<Item = i64>,
    violations: &mut Vec<Violation>,
) {
    let mut previous: Option<i64> = None;
    for id in ids {
        if previous.is_some_and(|prev| id <= prev) {
            violations.push(Violation::IdOutOfOrder { collection, id });
        }
        previous = Some(id);
    }
}
