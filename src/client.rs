//! The Lens Scholar API client.

use crate::error::{LensError, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.lens.org";

/// Environment variable [`LensClient::from_env`] reads the API key from.
pub const API_KEY_ENV: &str = "LENS_SCHOLAR_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("lens-scholar-client/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the Lens Scholar API.
///
/// Holds the API key and endpoint, both read-only after construction, so a
/// single instance can be shared across threads; each call issues one
/// independent HTTP request.
///
/// # Example
///
/// ```no_run
/// # fn example() -> lens_scholar_client::Result<()> {
/// let client = lens_scholar_client::LensClient::from_env()?;
/// let response = client.scholar_request(r#"{"query":{"match":{"title":"dark matter"}}}"#, 10)?;
/// println!("{}", response["total"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct LensClient {
    pub(crate) http: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl LensClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LensError::Config("API key must not be empty".to_string()));
        }
        Ok(Self {
            http: build_http(DEFAULT_TIMEOUT),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create a client from the `LENS_SCHOLAR_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| LensError::Config(format!("{API_KEY_ENV} is not set")))?;
        Self::new(key)
    }

    /// Override the base URL (useful for testing). Fails on a malformed URL.
    pub fn with_base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let parsed = Url::parse(url.as_ref())
            .map_err(|e| LensError::Config(format!("invalid base URL '{}': {e}", url.as_ref())))?;
        self.base_url = parsed.to_string().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Override the request timeout (default 30 seconds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http(timeout);
        self
    }

    /// Make an authenticated GET request to the Lens API.
    pub(crate) fn get(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()?;
        handle_response(response)
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .json(body)
            .send()?;
        handle_response(response)
    }
}

fn build_http(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

/// Map the HTTP response to a body or an API error carrying status and body.
fn handle_response(response: reqwest::blocking::Response) -> Result<String> {
    let status = response.status().as_u16();
    if (200..300).contains(&status) {
        Ok(response.text()?)
    } else {
        let body = response.text().unwrap_or_default();
        debug!(status, "API returned error status");
        Err(LensError::Api { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_key() {
        let err = LensClient::new("").unwrap_err();
        assert!(matches!(err, LensError::Config(_)));
    }

    #[test]
    fn test_with_base_url_rejects_malformed_url() {
        let client = LensClient::new("key").unwrap();
        let err = client.with_base_url("not a url").unwrap_err();
        assert!(matches!(err, LensError::Config(_)));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = LensClient::new("key")
            .unwrap()
            .with_base_url("http://localhost:8080/")
            .unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_from_env_round_trip() {
        // set + unset in one test to avoid racing a parallel test runner
        std::env::set_var(API_KEY_ENV, "test-key");
        assert!(LensClient::from_env().is_ok());

        std::env::remove_var(API_KEY_ENV);
        let err = LensClient::from_env().unwrap_err();
        assert!(matches!(err, LensError::Config(_)));

        std::env::set_var(API_KEY_ENV, "");
        let err = LensClient::from_env().unwrap_err();
        assert!(matches!(err, LensError::Config(_)));
        std::env::remove_var(API_KEY_ENV);
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        // nothing listens on this port
        let client = LensClient::new("key")
            .unwrap()
            .with_base_url("http://127.0.0.1:1")
            .unwrap()
            .with_timeout(Duration::from_millis(500));
        let err = client.get("/scholarly/whatever").unwrap_err();
        assert!(matches!(err, LensError::Http(_)));
    }
}
