//! Response shapes for the TMDB movie endpoints.
//!
//! Only the keys the importer reads are modelled; anything else in the
//! payloads is ignored. Every field is optional so that a partial payload
//! still decodes.

use serde::Deserialize;
use serde_json::Value;

/// Entries are kept raw so one malformed movie cannot sink the whole page.
#[derive(Debug, Deserialize)]
pub struct PopularResponse {
    pub results: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PopularMovie {
    /// Falsy or non-numeric ids decode as `None`.
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

/// `vote_average` distinguishes a missing key from an explicit `null`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub genres: Option<Vec<Named>>,
    #[serde(default, deserialize_with = "present")]
    pub vote_average: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub release_date: Option<Option<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MovieCredits {
    #[serde(default)]
    pub cast: Option<Vec<Named>>,
    #[serde(default)]
    pub crew: Option<Vec<CrewMember>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrewMember {
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(id.filter(|id| *id != 0))
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
