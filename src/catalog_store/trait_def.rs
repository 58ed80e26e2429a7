//! CatalogStore trait definition.
//!
//! This trait abstracts product storage so the import pipeline can run
//! against the SQLite store or an in-memory one.

use super::models::CatalogProduct;
use anyhow::Result;

/// Trait for catalog storage backends.
pub trait CatalogStore: Send + Sync {
    /// Look up a product by SKU. `Ok(None)` means no such product exists;
    /// `Err` is reserved for storage failures.
    fn find_by_sku(&self, sku: &str) -> Result<Option<CatalogProduct>>;

    /// Store a new product. Fails if the SKU is already taken.
    fn save(&self, product: &CatalogProduct) -> Result<()>;

    /// Get the number of products in the catalog.
    fn products_count(&self) -> usize;
}
