//! Movie Catalog Importer Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog_store;
pub mod config;
pub mod import;
pub mod movie;
pub mod sqlite_persistence;
pub mod tmdb;

// Re-export commonly used types for convenience
pub use catalog_store::{CatalogStore, InMemoryCatalogStore, SqliteCatalogStore};
pub use config::{CliConfig, FileConfig, ImporterConfig};
pub use import::{ImportReport, ImportRunner, ItemOutcome};
pub use tmdb::{ReqwestFetcher, TmdbClient, TmdbEndpoints, TmdbError};
