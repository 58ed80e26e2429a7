//! TMDB client assembling merged movie records.
//!
//! ## Pipeline per movie
//!
//! ```text
//! popular entry → base record → details (genres, rating, year)
//!               → credits (cast, director, producer) → merged record
//! ```
//!
//! Details and credits failures never abort a movie: the record keeps its
//! base values for the fields the failed call owns.

use super::endpoints::EndpointProvider;
use super::http::{redact_api_key, HttpFetcher};
use super::models::{MovieCredits, MovieDetails, PopularMovie, PopularResponse};
use crate::movie::{MergedMovieRecord, RecordDefaults};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that make the popular list unusable.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("Popular movies request failed with status {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("Failed to parse popular movies response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub struct TmdbClient {
    fetcher: Arc<dyn HttpFetcher>,
    endpoints: Arc<dyn EndpointProvider>,
    defaults: RecordDefaults,
}

impl TmdbClient {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        endpoints: Arc<dyn EndpointProvider>,
        defaults: RecordDefaults,
    ) -> Self {
        Self {
            fetcher,
            endpoints,
            defaults,
        }
    }

    /// Fetch one page of popular movies and merge details and credits into each.
    ///
    /// Entries without an identifier are dropped before any further request.
    pub fn fetch_popular(&self, page: u32) -> Result<Vec<MergedMovieRecord>, TmdbError> {
        let url = self.endpoints.popular_url(page);
        let response = self.fetcher.get(&url);
        if !response.is_success() {
            return Err(TmdbError::Status {
                status: response.status,
                reason: response.reason,
            });
        }
        let popular: PopularResponse = response.json()?;

        info!(
            "Fetched {} popular movies from page {}",
            popular.results.len(),
            page
        );

        let mut records = Vec::with_capacity(popular.results.len());
        for entry in popular.results {
            let movie = match serde_json::from_value::<PopularMovie>(entry) {
                Ok(movie) => movie,
                Err(e) => {
                    debug!("Skipping malformed popular entry: {}", e);
                    continue;
                }
            };
            let Some(record) = MergedMovieRecord::from_popular(&movie, &self.defaults) else {
                debug!("Skipping popular entry without id: {:?}", movie.title);
                continue;
            };
            let id = record.sku.clone();
            let record = self.merge_details(record, &id);
            let record = self.merge_credits(record, &id);
            records.push(record);
        }
        Ok(records)
    }

    /// Overlay the details endpoint onto `record`.
    pub fn merge_details(&self, record: MergedMovieRecord, movie_id: &str) -> MergedMovieRecord {
        match self.fetch_object::<MovieDetails>(&self.endpoints.details_url(movie_id)) {
            Some(details) => record.with_details(&details),
            None => {
                warn!("Keeping default detail fields for movie {}", movie_id);
                record
            }
        }
    }

    /// Overlay the credits endpoint onto `record`.
    pub fn merge_credits(&self, record: MergedMovieRecord, movie_id: &str) -> MergedMovieRecord {
        match self.fetch_object::<MovieCredits>(&self.endpoints.credits_url(movie_id)) {
            Some(credits) => record.with_credits(&credits),
            None => {
                warn!("Keeping default credit fields for movie {}", movie_id);
                record
            }
        }
    }

    fn fetch_object<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        let response = self.fetcher.get(url);
        if !response.is_success() {
            warn!(
                "GET {} returned status {}: {}",
                redact_api_key(url),
                response.status,
                response.reason
            );
            return None;
        }
        match response.json::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Failed to parse response of {}: {}", redact_api_key(url), e);
                None
            }
        }
    }
}
