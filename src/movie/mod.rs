//! Movie records assembled from the TMDB endpoints.

pub mod record;

pub use record::{release_year, MergedMovieRecord, RecordDefaults};
