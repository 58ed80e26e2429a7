use crate::catalog_store::{CatalogProduct, CatalogStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("'{name}', with SKU: {sku} not added, already in database.")]
    AlreadyExists { name: String, sku: String },

    #[error("Failed to save '{name}', with SKU: {sku}: {source:#}")]
    Storage {
        name: String,
        sku: String,
        source: anyhow::Error,
    },
}

/// Save `product` unless a product with the same SKU is already stored.
/// An existing product is never overwritten.
pub fn persist(store: &dyn CatalogStore, product: &CatalogProduct) -> Result<(), PersistError> {
    let storage_error = |source: anyhow::Error| PersistError::Storage {
        name: product.name.clone(),
        sku: product.sku.clone(),
        source,
    };

    if store.find_by_sku(&product.sku).map_err(storage_error)?.is_some() {
        return Err(PersistError::AlreadyExists {
            name: product.name.clone(),
            sku: product.sku.clone(),
        });
    }
    store.save(product).map_err(storage_error)
}
