use std::{collections::HashSet, path::Path, sync::Arc};

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::{
    filter::FilterSelection,
    models::{Product, ProductId},
};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Gender value that passes any specific gender selection.
pub const UNISEX: &str = "Унисекс";

pub const AGES: &[&str] = &["Дети", "Взрослые"];
pub const GENDERS: &[&str] = &["Мужской", "Женский", UNISEX];
pub const SPORTS: &[&str] = &["Бег", "Баскетбол", "Фитнес", "Плавание"];
pub const CATEGORIES: &[&str] = &["Обувь", "Одежда", "Мячи", "Тренажеры", "Аксессуары"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {0} has no sizes")]
    NoSizes(ProductId),

    #[error("product {id} original price {original_price} is below price {price}")]
    OriginalPriceBelowPrice {
        id: ProductId,
        price: u64,
        original_price: u64,
    },
}

/// Values the filter selects offer for each dimension.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Facets {
    pub age: Vec<String>,
    pub gender: Vec<String>,
    pub sport: Vec<String>,
    pub category: Vec<String>,
}

impl Default for Facets {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }
        Self {
            age: owned(AGES),
            gender: owned(GENDERS),
            sport: owned(SPORTS),
            category: owned(CATEGORIES),
        }
    }
}

/// The fixed, read-only product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        validate(&products)?;
        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The six sample products compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json(&raw)
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn filter(&self, selection: &FilterSelection) -> Vec<Arc<Product>> {
        crate::filter::apply(&self.products, selection)
    }
}

fn validate(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId(product.id));
        }
        if product.sizes.is_empty() {
            return Err(CatalogError::NoSizes(product.id));
        }
        match product.original_price {
            Some(original_price) if original_price < product.price => {
                return Err(CatalogError::OriginalPriceBelowPrice {
                    id: product.id,
                    price: product.price,
                    original_price,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads_in_order() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.get(5).map(|p| p.price), Some(899));
    }

    #[test]
    fn rejects_discount_priced_above_original() {
        let raw = r#"[{"id":1,"name":"x","price":100,"original_price":50,
            "category":"Обувь","age":"Дети","gender":"Унисекс","sport":"Бег","sizes":["M"]}]"#;
        assert!(matches!(
            Catalog::from_json(raw),
            Err(CatalogError::OriginalPriceBelowPrice { id: 1, .. })
        ));
    }

    #[test]
    fn rejects_product_without_sizes() {
        let raw = r#"[{"id":7,"name":"x","price":100,
            "category":"Обувь","age":"Дети","gender":"Унисекс","sport":"Бег","sizes":[]}]"#;
        assert!(matches!(Catalog::from_json(raw), Err(CatalogError::NoSizes(7))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let raw = r#"[
            {"id":1,"name":"a","price":1,"category":"c","age":"a","gender":"g","sport":"s","sizes":["M"]},
            {"id":1,"name":"b","price":1,"category":"c","age":"a","gender":"g","sport":"s","sizes":["M"]}
        ]"#;
        assert!(matches!(Catalog::from_json(raw), Err(CatalogError::DuplicateId(1))));
    }
}
