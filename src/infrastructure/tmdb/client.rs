//! Thin HTTP transport for the TMDB API.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::domain::provider::{ProviderError, ProviderResult};

/// A decoded upstream response.
///
/// `ok` mirrors whether the HTTP status was 2xx. For non-2xx responses the
/// body is still decoded when possible so the adapter can extract the
/// upstream error message; an undecodable error body degrades to
/// [`Value::Null`].
#[derive(Debug, Clone)]
pub struct TmdbResponse {
    pub ok: bool,
    pub status: u16,
    pub body: Value,
}

/// HTTP client for the TMDB API.
///
/// Owns the base URL, bearer token, and request timeout. Performs no
/// interpretation of payloads beyond JSON decoding; classifying a response
/// as success or failure by its content is the adapter's job.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TmdbClient {
    /// Builds a client with the given connection settings.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Performs a GET request against an API path.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Network`] on transport failures (DNS, connect,
    ///   timeout)
    /// - [`ProviderError::InvalidResponse`] when a 2xx response body is not
    ///   valid JSON
    ///
    /// A non-2xx status is NOT an error at this level; it comes back as
    /// `TmdbResponse { ok: false, .. }`.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> ProviderResult<TmdbResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "tmdb request");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let ok = response.status().is_success();

        if ok {
            let body: Value = response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

            Ok(TmdbResponse { ok, status, body })
        } else {
            // Keep whatever error body upstream sent; adapters mine it for
            // the status message.
            let body = response.json::<Value>().await.unwrap_or(Value::Null);

            Ok(TmdbResponse { ok, status, body })
        }
    }
}
