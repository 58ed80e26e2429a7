use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_catalog_importer::catalog_store::{
    CatalogStore, InMemoryCatalogStore, SqliteCatalogStore,
};
use movie_catalog_importer::config::{
    CliConfig, FileConfig, ImporterConfig, DEFAULT_API_BASE_URL, DEFAULT_DB_PATH, DEFAULT_PAGE,
};
use movie_catalog_importer::import::ImportRunner;
use movie_catalog_importer::tmdb::{ReqwestFetcher, TmdbClient, TmdbEndpoints};

const HEADER: &str = "Generating virtual products for popular movies...";

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    if path_buf.is_absolute() {
        return Ok(path_buf);
    }
    let cwd = std::env::current_dir().with_context(|| format!("Error resolving path: {}", s))?;
    Ok(cwd.join(path_buf))
}

/// Import TMDB popular movies into the product catalog.
///
/// Exits with status 0 once the popular list was fetched, whatever happened
/// to individual movies. If the popular list itself cannot be fetched or
/// decoded, nothing is imported and the command exits non-zero.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// TMDB API key.
    #[clap(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the TMDB movie API.
    #[clap(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Page of the popular list to import.
    #[clap(long, default_value_t = DEFAULT_PAGE)]
    pub page: u32,

    /// Path to the SQLite catalog database file.
    #[clap(long, default_value = DEFAULT_DB_PATH, value_parser = parse_path)]
    pub db_path: PathBuf,

    /// Timeout in seconds for each TMDB request.
    #[clap(long)]
    pub request_timeout_sec: Option<u64>,

    /// Run against an in-memory catalog instead of the database.
    #[clap(long)]
    pub dry_run: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            api_base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone(),
            page: self.page,
            db_path: self.db_path.clone(),
            request_timeout_sec: self.request_timeout_sec,
        }
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = ImporterConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let store: Arc<dyn CatalogStore> = if cli_args.dry_run {
        info!("Dry run, products will not be written to {:?}", config.db_path);
        Arc::new(InMemoryCatalogStore::new())
    } else {
        info!("Opening SQLite catalog database at {:?}...", config.db_path);
        Arc::new(SqliteCatalogStore::new(&config.db_path)?)
    };

    let fetcher = Arc::new(ReqwestFetcher::new(config.request_timeout)?);
    let endpoints = Arc::new(TmdbEndpoints::new(&config.api_base_url, &config.api_key));
    let client = TmdbClient::new(fetcher, endpoints, config.product.clone());
    let runner = ImportRunner::new(client, store);

    println!("{}", HEADER);
    println!();

    let report = runner
        .run_with(config.page, |outcome| println!("{}", outcome.message()))
        .with_context(|| format!("Failed to import popular movies page {}", config.page))?;

    info!(
        "Done: {} movies processed, {} added",
        report.outcomes.len(),
        report.added()
    );
    Ok(())
}
