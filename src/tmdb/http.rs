//! Blocking HTTP fetcher.
//!
//! Transport failures are folded into a synthetic [`FetchResponse`] so that
//! callers have a single path: check the status, then decode the body.

use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Status used for synthetic responses when the failure carried no HTTP status.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl FetchResponse {
    /// Response standing in for a request that never produced one.
    pub fn transport_failure(status: Option<u16>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: status.unwrap_or(TRANSPORT_FAILURE_STATUS),
            reason: message.clone(),
            body: message,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

pub trait HttpFetcher: Send + Sync {
    /// Issue a request; `params` are appended to the query string.
    fn fetch(&self, method: Method, url: &str, params: &[(&str, &str)]) -> FetchResponse;

    fn get(&self, url: &str) -> FetchResponse {
        self.fetch(Method::GET, url, &[])
    }
}

/// [`HttpFetcher`] backed by `reqwest`'s blocking client. No retries.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Create a fetcher. With `timeout` unset requests may wait indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn fetch(&self, method: Method, url: &str, params: &[(&str, &str)]) -> FetchResponse {
        debug!("{} {}", method, redact_api_key(url));

        let result = self
            .client
            .request(method, url)
            .query(params)
            .send()
            .and_then(|response| {
                let status = response.status();
                let body = response.text()?;
                Ok(FetchResponse {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                    body,
                })
            });

        match result {
            Ok(response) => response,
            Err(e) => {
                let e = e.without_url();
                warn!("Request to {} failed: {}", redact_api_key(url), e);
                FetchResponse::transport_failure(e.status().map(|s| s.as_u16()), e.to_string())
            }
        }
    }
}

/// Masks the `api_key` query value so URLs can be logged.
pub fn redact_api_key(url: &str) -> String {
    let Some(start) = url.find("api_key=") else {
        return url.to_string();
    };
    let value_start = start + "api_key=".len();
    let value_end = url[value_start..]
        .find('&')
        .map(|i| value_start + i)
        .unwrap_or(url.len());
    format!("{}***{}", &url[..value_start], &url[value_end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_defaults_status() {
        let response = FetchResponse::transport_failure(None, "connection refused");
        assert_eq!(response.status, TRANSPORT_FAILURE_STATUS);
        assert_eq!(response.reason, "connection refused");
        assert_eq!(response.body, "connection refused");
        assert!(!response.is_success());
    }

    #[test]
    fn test_is_success_range() {
        let ok = FetchResponse {
            status: 204,
            reason: "No Content".to_string(),
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!FetchResponse::transport_failure(Some(401), "unauthorized").is_success());
    }

    #[test]
    fn test_unreachable_host_yields_synthetic_response() {
        let fetcher = ReqwestFetcher::new(Some(Duration::from_secs(2))).unwrap();
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let response = fetcher.get("http://127.0.0.1:9/movie/popular");
        assert!(!response.is_success());
        assert!(!response.reason.is_empty());
        assert_eq!(response.reason, response.body);
    }

    #[test]
    fn test_invalid_url_yields_synthetic_response() {
        let fetcher = ReqwestFetcher::new(None).unwrap();
        let response = fetcher.get("not a url");
        assert_eq!(response.status, TRANSPORT_FAILURE_STATUS);
        assert!(response.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("https://h/3/movie/popular?api_key=secret&page=1"),
            "https://h/3/movie/popular?api_key=***&page=1"
        );
        assert_eq!(
            redact_api_key("https://h/3/movie/42?api_key=secret"),
            "https://h/3/movie/42?api_key=***"
        );
        assert_eq!(redact_api_key("https://h/3/movie/42"), "https://h/3/movie/42");
    }
}
