//! Drives one import run: fetch the popular list, then map and persist each
//! movie, recording one outcome per item.

use super::mapper::to_product;
use super::persister::{persist, PersistError};
use crate::catalog_store::CatalogStore;
use crate::movie::MergedMovieRecord;
use crate::tmdb::{TmdbClient, TmdbError};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Added { name: String, sku: String },
    /// A product with this SKU was already in the catalog.
    Skipped { sku: String, message: String },
    Failed { sku: String, message: String },
}

impl ItemOutcome {
    /// The line shown to the user for this item.
    pub fn message(&self) -> String {
        match self {
            ItemOutcome::Added { name, sku } => format!("Added '{}', with SKU: {}", name, sku),
            ItemOutcome::Skipped { message, .. } | ItemOutcome::Failed { message, .. } => {
                message.clone()
            }
        }
    }

    pub fn sku(&self) -> &str {
        match self {
            ItemOutcome::Added { sku, .. }
            | ItemOutcome::Skipped { sku, .. }
            | ItemOutcome::Failed { sku, .. } => sku,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl ImportReport {
    pub fn added(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Added { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}

pub struct ImportRunner {
    client: TmdbClient,
    store: Arc<dyn CatalogStore>,
}

impl ImportRunner {
    pub fn new(client: TmdbClient, store: Arc<dyn CatalogStore>) -> Self {
        Self { client, store }
    }

    /// Import one page of popular movies.
    ///
    /// Only a failure to obtain the list itself is returned as an error; every
    /// per-movie problem ends up in the report.
    pub fn run(&self, page: u32) -> Result<ImportReport, TmdbError> {
        self.run_with(page, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_item` as soon as each outcome is known.
    pub fn run_with(
        &self,
        page: u32,
        mut on_item: impl FnMut(&ItemOutcome),
    ) -> Result<ImportReport, TmdbError> {
        let records = self.client.fetch_popular(page)?;

        let mut report = ImportReport::default();
        for record in &records {
            let outcome = self.import_record(record);
            on_item(&outcome);
            report.outcomes.push(outcome);
        }

        info!(
            "Import of page {} finished: {} added, {} skipped, {} failed",
            page,
            report.added(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }

    /// Map and persist a single record.
    pub fn import_record(&self, record: &MergedMovieRecord) -> ItemOutcome {
        let product = match to_product(record) {
            Ok(product) => product,
            Err(e) => {
                warn!("Could not map movie {}: {}", record.sku, e);
                return ItemOutcome::Failed {
                    sku: record.sku.clone(),
                    message: e.to_string(),
                };
            }
        };

        match persist(self.store.as_ref(), &product) {
            Ok(()) => {
                debug!("Saved product {}", product.sku);
                ItemOutcome::Added {
                    name: product.name,
                    sku: product.sku,
                }
            }
            Err(e @ PersistError::AlreadyExists { .. }) => ItemOutcome::Skipped {
                sku: product.sku,
                message: e.to_string(),
            },
            Err(e @ PersistError::Storage { .. }) => {
                warn!("{}", e);
                ItemOutcome::Failed {
                    sku: product.sku,
                    message: e.to_string(),
                }
            }
        }
    }
}
