//! In-memory catalog store.
//!
//! Keeps products in a map keyed by SKU. Used by tests and by dry runs that
//! should not touch the database.

use super::models::CatalogProduct;
use super::trait_def::CatalogStore;
use anyhow::{bail, Result};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryCatalogStore {
    products: Mutex<BTreeMap<String, CatalogProduct>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn find_by_sku(&self, sku: &str) -> Result<Option<CatalogProduct>> {
        Ok(self.products.lock().unwrap().get(sku).cloned())
    }

    fn save(&self, product: &CatalogProduct) -> Result<()> {
        let mut products = self.products.lock().unwrap();
        if products.contains_key(&product.sku) {
            bail!("Product with SKU '{}' already exists", product.sku);
        }
        products.insert(product.sku.clone(), product.clone());
        Ok(())
    }

    fn products_count(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}
