//! Shared constants for end-to-end tests
//!
//! Movie ids and names served by the mock TMDB server. When fixture data
//! changes, update only this file and `fixtures.rs`.

/// API key the mock server accepts; any other key gets a 401.
pub const TEST_API_KEY: &str = "test-api-key";

/// Path prefix the mock server mounts its movie routes under.
pub const MOVIE_API_PATH: &str = "/3/movie";

// ============================================================================
// Popular page 1
// ============================================================================

/// Fully described movie: details and credits both succeed.
pub const MOVIE_1_ID: u64 = 42;
pub const MOVIE_1_TITLE: &str = "The Test Movie";
pub const MOVIE_1_OVERVIEW: &str = "A movie that exists only in tests.";

/// Movie whose details endpoint returns 500. Credits still succeed.
pub const MOVIE_2_ID: u64 = 7;
pub const MOVIE_2_TITLE: &str = "Broken Details";

/// Title of the popular entry that has no id.
pub const MISSING_ID_TITLE: &str = "Nobody Knows";

// ============================================================================
// Pages
// ============================================================================

/// Page whose popular request fails with 500.
pub const FAILING_PAGE: u32 = 99;

/// Page whose popular response is not valid JSON.
pub const GARBAGE_PAGE: u32 = 98;

/// Pages other than 1 and the special ones above return an empty list.
pub const EMPTY_PAGE: u32 = 2;
