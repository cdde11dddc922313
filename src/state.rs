use std::sync::Arc;

use crate::{cart::SharedCart, catalog::Catalog, config::AppConfig, error::AppResult};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cart: SharedCart,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart: SharedCart::new(),
        }
    }

    /// Loads the configured catalog file, falling back to the embedded sample products.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog file");
                Catalog::from_file(path).await?
            }
            None => Catalog::embedded()?,
        };
        tracing::info!(products = catalog.len(), "catalog ready");
        Ok(Self::new(catalog))
    }
}
