//! The merged movie record.
//!
//! A record starts from a popular-list entry and is then overlaid with the
//! details and credits payloads. Each overlay only writes the fields it
//! owns, so the order details → credits never loses data.

use crate::catalog_store::{ProductStatus, ProductType};
use crate::tmdb::models::{CrewMember, MovieCredits, MovieDetails, Named, PopularMovie};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const DIRECTOR_JOB: &str = "director";
const PRODUCER_JOB: &str = "producer";

/// Fixed product fields applied to every imported movie.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDefaults {
    pub price: f64,
    pub qty: u32,
    pub status: ProductStatus,
    pub product_type: ProductType,
    pub attribute_set_id: u32,
    pub category_ids: Vec<u32>,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            price: 5.99,
            qty: 100,
            status: ProductStatus::Enabled,
            product_type: ProductType::Virtual,
            attribute_set_id: 4,
            category_ids: vec![2],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedMovieRecord {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub genre: String,
    pub actors: String,
    pub director: String,
    pub producer: String,
    pub vote_average: Option<f64>,
    pub year: Option<String>,
    pub price: f64,
    pub qty: u32,
    pub status: ProductStatus,
    pub product_type: ProductType,
    pub attribute_set_id: u32,
    pub category_ids: Vec<u32>,
}

impl MergedMovieRecord {
    /// Builds the base record for a popular-list entry.
    ///
    /// Returns `None` when the entry has no usable identifier (absent or `0`).
    pub fn from_popular(movie: &PopularMovie, defaults: &RecordDefaults) -> Option<Self> {
        let id = movie.id.filter(|id| *id != 0)?;
        Some(Self {
            sku: id.to_string(),
            name: movie.title.clone().unwrap_or_default(),
            description: movie.overview.clone().unwrap_or_default(),
            genre: String::new(),
            actors: String::new(),
            director: String::new(),
            producer: String::new(),
            vote_average: None,
            year: None,
            price: defaults.price,
            qty: defaults.qty,
            status: defaults.status,
            product_type: defaults.product_type,
            attribute_set_id: defaults.attribute_set_id,
            category_ids: defaults.category_ids.clone(),
        })
    }

    /// Overlays genre, vote average and year. Keys missing from the payload
    /// leave the current values untouched.
    pub fn with_details(mut self, details: &MovieDetails) -> Self {
        if let Some(genres) = &details.genres {
            self.genre = join_names(genres);
        }
        if let Some(vote_average) = details.vote_average {
            self.vote_average = vote_average;
        }
        if let Some(release_date) = &details.release_date {
            self.year = release_date.as_deref().and_then(release_year);
        }
        self
    }

    /// Overlays actors, directors and producers.
    pub fn with_credits(mut self, credits: &MovieCredits) -> Self {
        if let Some(cast) = &credits.cast {
            self.actors = join_names(cast);
        }
        if let Some(crew) = &credits.crew {
            self.director = join_crew_with_job(crew, DIRECTOR_JOB);
            self.producer = join_crew_with_job(crew, PRODUCER_JOB);
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        !self.sku.trim().is_empty()
    }
}

fn join_names(entries: &[Named]) -> String {
    entries
        .iter()
        .filter_map(|entry| entry.name.as_deref())
        .collect::<Vec<_>>()
        .join(",")
}

fn join_crew_with_job(crew: &[CrewMember], job: &str) -> String {
    crew.iter()
        .filter(|member| {
            member
                .job
                .as_deref()
                .is_some_and(|j| j.to_lowercase() == job)
        })
        .filter_map(|member| member.name.as_deref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Four-digit year of a `YYYY-MM-DD` date, `None` if it does not parse.
pub fn release_year(release_date: &str) -> Option<String> {
    NaiveDate::parse_from_str(release_date.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| format!("{:04}", date.year()))
}
