/// Source of the three movie endpoint URLs.
pub trait EndpointProvider: Send + Sync {
    fn popular_url(&self, page: u32) -> String;
    fn details_url(&self, movie_id: &str) -> String;
    fn credits_url(&self, movie_id: &str) -> String;
}

/// TMDB v3 endpoints, authenticated with an `api_key` query parameter.
#[derive(Debug, Clone)]
pub struct TmdbEndpoints {
    base_url: String,
    api_key: String,
}

impl TmdbEndpoints {
    /// `base_url` is the movie collection root, e.g. `https://api.themoviedb.org/3/movie`.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?api_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&self.api_key)
        )
    }
}

impl EndpointProvider for TmdbEndpoints {
    fn popular_url(&self, page: u32) -> String {
        format!("{}&page={}", self.build_url("popular"), page)
    }

    fn details_url(&self, movie_id: &str) -> String {
        self.build_url(&urlencoding::encode(movie_id))
    }

    fn credits_url(&self, movie_id: &str) -> String {
        self.build_url(&format!("{}/credits", urlencoding::encode(movie_id)))
    }
}
