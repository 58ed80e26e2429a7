//! Catalog product models.
//!
//! `CatalogProduct` is the storage-facing shape of a movie: the required
//! product fields plus the movie-specific custom attributes.

use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// Catalog product type
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Simple,
    Virtual,
}

impl ProductType {
    /// Convert from database string representation
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(ProductType::Simple),
            "virtual" => Some(ProductType::Virtual),
            _ => None,
        }
    }

    /// Convert to database string representation
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ProductType::Simple => "simple",
            ProductType::Virtual => "virtual",
        }
    }
}

/// Whether a product is sellable
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Enabled,
    Disabled,
}

impl ProductStatus {
    pub fn is_enabled(&self) -> bool {
        matches!(self, ProductStatus::Enabled)
    }
}

// =============================================================================
// Product
// =============================================================================

/// Quantity, stock status and stock management flag, always set together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryDescriptor {
    pub qty: u32,
    pub is_in_stock: bool,
    pub manage_stock: bool,
}

/// A catalog product built from a merged movie record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub product_type: ProductType,
    pub attribute_set_id: u32,
    pub inventory: InventoryDescriptor,
    pub description: String,
    pub category_ids: Vec<u32>,

    // Custom attributes
    pub year: Option<String>,
    pub vote_average: Option<f64>,
    pub genre: String,
    pub actors: String,
    pub director: String,
    pub producer: String,
}
