use crate::catalog_store::{CatalogProduct, InventoryDescriptor};
use crate::movie::MergedMovieRecord;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("Movie '{name}' has no SKU, not added.")]
    MissingSku { name: String },

    #[error("'{name}', with SKU: {sku} has an invalid price {price}, not added.")]
    InvalidPrice { name: String, sku: String, price: f64 },
}

/// Convert a merged record into a catalog product. Pure.
pub fn to_product(record: &MergedMovieRecord) -> Result<CatalogProduct, MappingError> {
    if !record.is_valid() {
        return Err(MappingError::MissingSku {
            name: record.name.clone(),
        });
    }
    if !record.price.is_finite() || record.price < 0.0 {
        return Err(MappingError::InvalidPrice {
            name: record.name.clone(),
            sku: record.sku.clone(),
            price: record.price,
        });
    }

    Ok(CatalogProduct {
        sku: record.sku.clone(),
        name: record.name.clone(),
        price: record.price,
        product_type: record.product_type,
        attribute_set_id: record.attribute_set_id,
        inventory: InventoryDescriptor {
            qty: record.qty,
            is_in_stock: record.status.is_enabled(),
            manage_stock: true,
        },
        description: record.description.clone(),
        category_ids: record.category_ids.clone(),
        year: record.year.clone(),
        vote_average: record.vote_average,
        genre: record.genre.clone(),
        actors: record.actors.clone(),
        director: record.director.clone(),
        producer: record.producer.clone(),
    })
}
