//! HTTP client capability used to reach the bodies API
//!
//! The service only needs a GET that returns a status code and a text
//! body, so that is all [`HttpClient`] exposes. [`ReqwestClient`] is the
//! blocking network backend.

use std::time::Duration;

use crate::constants::DEFAULT_API_URL;
use crate::PlanetfieldError;
use crate::Result;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Status code and body of a completed GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body decoded as text
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 200-299 range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A client able to issue GET requests relative to some base URL
pub trait HttpClient {
    /// GET `path` and return the status and body
    ///
    /// Only transport failures are errors; a non-success status is a
    /// normal response.
    fn get(&self, path: &str) -> Result<HttpResponse>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, path: &str) -> Result<HttpResponse> {
        (**self).get(path)
    }
}

/// Blocking `reqwest` client bound to a base URL
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ReqwestClient {
    /// Create a client for the public Solar System OpenData API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client for a custom base URL and request timeout
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlanetfieldError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Base URL every request path is joined to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request path
    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, path: &str) -> Result<HttpResponse> {
        let url = self.url_for(path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| PlanetfieldError::Http(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| PlanetfieldError::Http(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Join a base URL and a relative path with exactly one slash between them
fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}
