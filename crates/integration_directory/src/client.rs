//! Hospital directory client via the dekontaminasi.com API
//!
//! A single unauthenticated GET returns the whole list as a JSON array.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;
use crate::models::HospitalEntry;

/// Trait for hospital directory clients
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch every published entry, in source order
    async fn fetch_hospitals(&self) -> Result<Vec<HospitalEntry>, DirectoryError>;
}

/// Directory client backed by dekontaminasi.com
#[derive(Debug)]
pub struct DekontaminasiClient {
    client: Client,
    config: DirectoryConfig,
}

impl DekontaminasiClient {
    /// Create a new directory client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        config
            .validate()
            .map_err(DirectoryError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| DirectoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Parse the response body into entries
    ///
    /// The body must be a JSON array; individual elements are read leniently.
    fn parse_hospitals(body: &str) -> Result<Vec<HospitalEntry>, DirectoryError> {
        let raw: Vec<Value> =
            serde_json::from_str(body).map_err(|e| DirectoryError::ParseError(e.to_string()))?;

        Ok(raw.iter().map(HospitalEntry::from_value).collect())
    }
}

#[async_trait]
impl DirectoryClient for DekontaminasiClient {
    #[instrument(skip(self))]
    async fn fetch_hospitals(&self) -> Result<Vec<HospitalEntry>, DirectoryError> {
        let url = self.config.hospitals_url();

        debug!(?url, "Fetching hospital directory");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                DirectoryError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                DirectoryError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectoryError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Err(DirectoryError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            return Err(DirectoryError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::ParseError(e.to_string()))?;

        let entries = Self::parse_hospitals(&body)?;

        if entries.is_empty() {
            warn!("Directory returned no entries");
        }

        debug!(count = entries.len(), "Directory entries fetched");
        Ok(entries)
    }
}
