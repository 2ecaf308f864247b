//! NYC Open Data inspection API client.

use std::time::Instant;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::FetchError;
use crate::metrics;

/// Socrata query parameter bounding the number of returned rows.
const LIMIT_PARAM: &str = "$limit";

/// Client for the restaurant inspection dataset.
#[derive(Debug, Clone)]
pub struct InspectionClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Dataset endpoint.
    upstream_url: String,
    /// Value sent as `$limit`.
    page_limit: u64,
}

impl InspectionClient {
    /// Create a client from config.
    ///
    /// No request timeout is set unless `HTTP_TIMEOUT_MS` is configured.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            // Keep connections alive for reuse across requests
            .pool_idle_timeout(std::time::Duration::from_secs(90));

        if let Some(timeout) = config.http_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            upstream_url: config.upstream_url.clone(),
            page_limit: config.page_limit,
        })
    }

    /// Get the dataset endpoint.
    pub fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    /// Get the configured page limit.
    pub fn page_limit(&self) -> u64 {
        self.page_limit
    }

    /// Fetch the raw dataset page as untyped JSON.
    #[instrument(skip(self), fields(url = %self.upstream_url, limit = self.page_limit))]
    pub async fn fetch_payload(&self) -> Result<Value, FetchError> {
        let start = Instant::now();
        metrics::inc_upstream_fetches();

        let result = self.request().await;
        metrics::record_upstream_fetch_latency(start);

        if let Err(e) = &result {
            if e.is_network() {
                metrics::inc_upstream_fetch_failures();
            }
        }

        result
    }

    async fn request(&self) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(&self.upstream_url)
            .query(&[(LIMIT_PARAM, self.page_limit)])
            .send()
            .await
            .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        debug!(bytes = body.len(), "Received upstream payload");

        serde_json::from_slice(&body).map_err(FetchError::Decode)
    }
}
