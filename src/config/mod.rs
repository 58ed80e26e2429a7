mod file_config;

pub use file_config::{FileConfig, ProductConfig};

use crate::movie::RecordDefaults;
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3/movie";
pub const DEFAULT_DB_PATH: &str = "catalog.db";
pub const DEFAULT_PAGE: u32 = 1;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api_base_url: String,
    pub api_key: Option<String>,
    pub page: u32,
    pub db_path: PathBuf,
    pub request_timeout_sec: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            page: DEFAULT_PAGE,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            request_timeout_sec: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImporterConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub page: u32,
    pub db_path: PathBuf,
    pub request_timeout: Option<Duration>,
    pub product: RecordDefaults,
}

impl ImporterConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let api_base_url = file
            .api_base_url
            .unwrap_or_else(|| cli.api_base_url.clone());
        if api_base_url.trim().is_empty() {
            bail!("api_base_url must not be empty");
        }

        let api_key = file
            .api_key
            .or_else(|| cli.api_key.clone())
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "api_key must be specified via --api-key, TMDB_API_KEY or in config file"
                )
            })?;

        let page = file.page.unwrap_or(cli.page);
        if page == 0 {
            bail!("page must be 1 or greater");
        }

        let db_path = file
            .db_path
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.db_path.clone());

        let request_timeout = file
            .request_timeout_sec
            .or(cli.request_timeout_sec)
            .map(Duration::from_secs);

        // Product settings - merge file config with defaults
        let defaults = RecordDefaults::default();
        let product_file = file.product.unwrap_or_default();
        let product = RecordDefaults {
            price: product_file.price.unwrap_or(defaults.price),
            qty: product_file.qty.unwrap_or(defaults.qty),
            status: product_file.status.unwrap_or(defaults.status),
            product_type: product_file.product_type.unwrap_or(defaults.product_type),
            attribute_set_id: product_file
                .attribute_set_id
                .unwrap_or(defaults.attribute_set_id),
            category_ids: product_file.category_ids.unwrap_or(defaults.category_ids),
        };
        if !product.price.is_finite() || product.price < 0.0 {
            bail!("product price must be a non-negative number, got {}", product.price);
        }

        Ok(Self {
            api_base_url,
            api_key,
            page,
            db_path,
            request_timeout,
            product,
        })
    }
}
