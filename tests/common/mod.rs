//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{importer, TestServer};
//!
//! #[test]
//! fn test_import() {
//!     let server = TestServer::spawn();
//!     let (runner, _store, _dir) = importer(&server);
//!
//!     let report = runner.run(1).unwrap();
//!     assert_eq!(report.added(), 2);
//! }
//! ```

mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use constants::*;
pub use server::TestServer;

use movie_catalog_importer::catalog_store::SqliteCatalogStore;
use movie_catalog_importer::import::ImportRunner;
use movie_catalog_importer::movie::RecordDefaults;
use movie_catalog_importer::tmdb::{ReqwestFetcher, TmdbClient, TmdbEndpoints};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Builds a runner wired to `server` with the given API key, persisting into
/// a fresh on-disk catalog.
pub fn importer_with_key(
    server: &TestServer,
    api_key: &str,
) -> (ImportRunner, Arc<SqliteCatalogStore>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = Arc::new(
        SqliteCatalogStore::new(temp_dir.path().join("catalog.db"))
            .expect("Failed to open catalog store"),
    );
    let runner = runner_for_store(server, api_key, store.clone());
    (runner, store, temp_dir)
}

/// Builds a runner wired to `server` using the accepted API key.
pub fn importer(server: &TestServer) -> (ImportRunner, Arc<SqliteCatalogStore>, TempDir) {
    importer_with_key(server, TEST_API_KEY)
}

/// Builds a runner wired to `server` persisting into an existing store.
pub fn runner_for_store(
    server: &TestServer,
    api_key: &str,
    store: Arc<SqliteCatalogStore>,
) -> ImportRunner {
    let fetcher = Arc::new(
        ReqwestFetcher::new(Some(Duration::from_secs(5))).expect("Failed to build fetcher"),
    );
    let endpoints = Arc::new(TmdbEndpoints::new(&server.api_base_url, api_key));
    let client = TmdbClient::new(fetcher, endpoints, RecordDefaults::default());
    ImportRunner::new(client, store)
}
