//! Backend HTTP client
//!
//! Typed wrappers over the marketing-site backend: the public SEO
//! endpoint and the admin content endpoints (compliance bulletins and
//! the holiday calendar). Read requests retry transient failures with
//! exponential backoff. Mutations never retry; the operator retries
//! manually if needed.

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

use crate::admin::{ComplianceBulletin, Holiday};
use crate::error::{Result, SiteError};
use crate::seo::SeoMetadata;

/// Configuration for the site client
#[derive(Debug, Clone)]
pub struct SiteClientConfig {
    /// Base URL of the backend API
    pub base_url: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,

    /// Maximum retry attempts for read requests
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds
    pub max_backoff_ms: u64,

    /// Backoff multiplier
    pub backoff_multiplier: f64,
}

impl Default for SiteClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 5000,
            max_retries: 3,
            initial_backoff_ms: 100,
            max_backoff_ms: 5000,
            backoff_multiplier: 2.0,
        }
    }
}

impl SiteClientConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("SITE_API_BASE_URL") {
            config.base_url = url;
        }
        if let Some(timeout) = std::env::var("SITE_API_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.timeout_ms = timeout;
        }
        if let Some(retries) = std::env::var("SITE_API_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_retries = retries;
        }
        config
    }
}

/// HTTP client for the site backend
pub struct SiteClient {
    client: Client,
    config: SiteClientConfig,
}

impl SiteClient {
    /// Create a new client for a base URL with default configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = SiteClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        };
        Self::with_config(config)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: SiteClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET with retry for transport errors and server errors
    async fn get_with_retry(
        &self,
        url: &str,
        query: &[(&str, String)],
        no_cache: bool,
    ) -> Result<reqwest::Response> {
        let mut last_error = None;
        let mut backoff_ms = self.config.initial_backoff_ms;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::debug!(attempt, backoff_ms, url, "retrying request");
                sleep(Duration::from_millis(backoff_ms)).await;
                backoff_ms = (backoff_ms as f64 * self.config.backoff_multiplier) as u64;
                backoff_ms = backoff_ms.min(self.config.max_backoff_ms);
            }

            let mut request = self
                .client
                .get(url)
                .query(query)
                .header("X-Request-Id", Uuid::new_v4().to_string());
            if no_cache {
                // Always revalidate: stale metadata must never be served
                // back after a navigation.
                request = request
                    .header(CACHE_CONTROL, "no-cache")
                    .header(PRAGMA, "no-cache");
            }

            match request.send().await {
                Ok(response) if response.status().is_server_error() => {
                    tracing::warn!(
                        attempt,
                        status = %response.status(),
                        url,
                        "server error, will retry"
                    );
                    last_error = Some(SiteError::api_error(
                        response.status().as_u16(),
                        "server error",
                    ));
                }
                Ok(response) => return Ok(response),
                Err(error) => {
                    tracing::warn!(attempt, error = %error, url, "request failed");
                    last_error = Some(error.into());
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| SiteError::HttpError("request failed without attempts".to_string())))
    }

    async fn error_from_response(response: reqwest::Response) -> SiteError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        SiteError::api_error(status, message)
    }

    /// Fetch per-page SEO metadata from the public endpoint
    ///
    /// Returns `Ok(None)` for a non-success status or an empty record;
    /// transport and parse failures surface as errors. The synchronizer
    /// collapses all three to the defaults.
    pub async fn fetch_public_seo(
        &self,
        page_type: &str,
        reference_id: Option<&str>,
    ) -> Result<Option<SeoMetadata>> {
        let url = self.endpoint("/api/v1/seo/public");
        let mut query = vec![("page_type", page_type.to_string())];
        if let Some(id) = reference_id {
            query.push(("page_reference_id", id.to_string()));
        }

        let response = self.get_with_retry(&url, &query, true).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, page_type, "seo endpoint returned non-success");
            return Ok(None);
        }

        let metadata: SeoMetadata = response
            .json()
            .await
            .map_err(|e| SiteError::ParseError(format!("seo response: {}", e)))?;

        if metadata.is_empty() {
            Ok(None)
        } else {
            Ok(Some(metadata))
        }
    }

    /// List all compliance bulletins
    pub async fn list_bulletins(&self) -> Result<Vec<ComplianceBulletin>> {
        let url = self.endpoint("/api/v1/compliance");
        let response = self.get_with_retry(&url, &[], false).await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| SiteError::ParseError(format!("bulletin list: {}", e)))
    }

    /// Create or update a compliance bulletin
    ///
    /// An `id` of zero creates a new bulletin; the saved entity (with its
    /// assigned id) is returned.
    pub async fn upsert_bulletin(&self, bulletin: &ComplianceBulletin) -> Result<ComplianceBulletin> {
        let url = self.endpoint("/api/v1/compliance/upsert");
        let response = self
            .client
            .post(&url)
            .json(bulletin)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| SiteError::ParseError(format!("bulletin upsert: {}", e)))
    }

    /// Delete a compliance bulletin by id
    pub async fn delete_bulletin(&self, id: u64) -> Result<()> {
        let url = self.endpoint(&format!("/api/v1/compliance/{}", id));
        let response = self
            .client
            .delete(&url)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(SiteError::api_error(404, format!("bulletin {} not found", id)));
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    /// List all holidays
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>> {
        let url = self.endpoint("/api/v1/holidays");
        let response = self.get_with_retry(&url, &[], false).await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| SiteError::ParseError(format!("holiday list: {}", e)))
    }

    /// Create or update a holiday
    pub async fn upsert_holiday(&self, holiday: &Holiday) -> Result<Holiday> {
        let url = self.endpoint("/api/v1/holidays/upsert");
        let response = self
            .client
            .post(&url)
            .json(holiday)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| SiteError::ParseError(format!("holiday upsert: {}", e)))
    }

    /// Delete a holiday by id
    pub async fn delete_holiday(&self, id: u64) -> Result<()> {
        let url = self.endpoint(&format!("/api/v1/holidays/{}", id));
        let response = self
            .client
            .delete(&url)
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(SiteError::api_error(404, format!("holiday {} not found", id)));
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}

/// Builder for SiteClient
pub struct SiteClientBuilder {
    config: SiteClientConfig,
}

impl SiteClientBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: SiteClientConfig::default(),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout_ms(mut self, timeout: u64) -> Self {
        self.config.timeout_ms = timeout;
        self
    }

    /// Set the maximum retry attempts for reads
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the initial backoff delay
    pub fn initial_backoff_ms(mut self, backoff: u64) -> Self {
        self.config.initial_backoff_ms = backoff;
        self
    }

    /// Set the maximum backoff delay
    pub fn max_backoff_ms(mut self, backoff: u64) -> Self {
        self.config.max_backoff_ms = backoff;
        self
    }

    /// Build the client
    pub fn build(self) -> SiteClient {
        SiteClient::with_config(self.config)
    }
}

impl Default for SiteClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
