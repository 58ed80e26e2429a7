use crate::catalog_store::{ProductStatus, ProductType};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub page: Option<u32>,
    pub db_path: Option<String>,
    pub request_timeout_sec: Option<u64>,

    pub product: Option<ProductConfig>,
}

/// Fixed values written to every imported product.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ProductConfig {
    pub price: Option<f64>,
    pub qty: Option<u32>,
    pub status: Option<ProductStatus>,
    pub product_type: Option<ProductType>,
    pub attribute_set_id: Option<u32>,
    pub category_ids: Option<Vec<u32>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
