use std::sync::Arc;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{catalog::UNISEX, models::Product};

/// Currently chosen constraint values. `None` or an empty string leaves the
/// dimension unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterSelection {
    /// Exact match on the product's age group.
    pub age: Option<String>,
    /// Matches the product's gender; unisex products always pass.
    pub gender: Option<String>,
    /// Exact match on the product's sport.
    pub sport: Option<String>,
    /// Exact match on the product's category.
    pub category: Option<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        [&self.age, &self.gender, &self.sport, &self.category]
            .into_iter()
            .all(|field| constraint(field).is_none())
    }

    pub fn matches(&self, product: &Product) -> bool {
        constraint(&self.age).is_none_or(|age| product.age == age)
            && constraint(&self.gender)
                .is_none_or(|gender| product.gender == gender || product.gender == UNISEX)
            && constraint(&self.sport).is_none_or(|sport| product.sport == sport)
            && constraint(&self.category).is_none_or(|category| product.category == category)
    }
}

fn constraint(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Stable filter: the visible products keep their catalog order.
pub fn apply(products: &[Arc<Product>], selection: &FilterSelection) -> Vec<Arc<Product>> {
    products
        .iter()
        .filter(|product| selection.matches(product))
        .cloned()
        .collect()
}
