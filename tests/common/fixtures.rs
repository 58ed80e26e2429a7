//! TMDB payloads served by the mock server.

use super::constants::*;
use serde_json::{json, Value};

pub fn popular_page(page: u32) -> Value {
    let results = if page == 1 {
        json!([
            {
                "id": MOVIE_1_ID,
                "title": MOVIE_1_TITLE,
                "overview": MOVIE_1_OVERVIEW,
                "popularity": 812.4
            },
            {
                "id": MOVIE_2_ID,
                "title": MOVIE_2_TITLE,
                "overview": ""
            },
            {
                "title": MISSING_ID_TITLE,
                "overview": "No id, never requested further."
            }
        ])
    } else {
        json!([])
    };
    json!({
        "page": page,
        "results": results,
        "total_pages": 2,
        "total_results": 3
    })
}

pub fn movie_details(id: u64) -> Option<Value> {
    match id {
        MOVIE_1_ID => Some(json!({
            "id": MOVIE_1_ID,
            "title": MOVIE_1_TITLE,
            "genres": [
                { "id": 28, "name": "Action" },
                { "id": 18, "name": "Drama" }
            ],
            "vote_average": 7.5,
            "release_date": "2019-05-03",
            "runtime": 121
        })),
        _ => None,
    }
}

pub fn movie_credits(id: u64) -> Option<Value> {
    match id {
        MOVIE_1_ID => Some(json!({
            "id": MOVIE_1_ID,
            "cast": [
                { "name": "Alice Actor", "character": "Lead" },
                { "name": "Bob Actor", "character": "Sidekick" }
            ],
            "crew": [
                { "name": "Carol Director", "job": "Director" },
                { "name": "Dan Producer", "job": "Producer" },
                { "name": "Erin Writer", "job": "Screenplay" }
            ]
        })),
        MOVIE_2_ID => Some(json!({
            "id": MOVIE_2_ID,
            "cast": [{ "name": "Zed Actor" }],
            "crew": []
        })),
        _ => None,
    }
}
