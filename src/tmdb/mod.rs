//! TMDB movie API access.
//!
//! - `http`: blocking fetcher that never fails, only reports status
//! - `endpoints`: URL construction for the popular, details and credits endpoints
//! - `client`: the popular → details → credits merge

pub mod client;
pub mod endpoints;
pub mod http;
pub mod models;

pub use client::{TmdbClient, TmdbError};
pub use endpoints::{EndpointProvider, TmdbEndpoints};
pub use http::{FetchResponse, HttpFetcher, ReqwestFetcher};
