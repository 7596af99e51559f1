//! Nominatim geocoding client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::GeoLocation;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to candidate coordinates, best match first
    ///
    /// An address with no match yields an empty list.
    async fn geocode(&self, address: &str) -> Result<Vec<GeoLocation>, GeocodingError>;
}

/// Nominatim-based geocoding client with request spacing
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        config
            .validate()
            .map_err(GeocodingError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// Enforce the minimum spacing between requests
    async fn rate_limit(&self) {
        let interval = Duration::from_millis(self.config.min_interval_ms);
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    /// Parse a search response into locations
    ///
    /// Candidates with unparseable or out-of-range coordinates are skipped.
    fn parse_results(body: &str) -> Result<Vec<GeoLocation>, GeocodingError> {
        let results: Vec<NominatimResult> =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(results
            .into_iter()
            .filter_map(|result| {
                let location = result.to_location();
                if location.is_none() {
                    warn!(lat = %result.lat, lon = %result.lon, "Skipping invalid geocoding candidate");
                }
                location
            })
            .collect())
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Vec<GeoLocation>, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            debug!("Empty address, nothing to geocode");
            return Ok(Vec::new());
        }

        self.rate_limit().await;

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut params = vec![
            ("q", address.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", self.config.max_results.to_string()),
            ("accept-language", "id,en".to_string()),
        ];

        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        debug!(%address, "Geocoding address");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodingError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let locations = Self::parse_results(&body)?;
        debug!(%address, count = locations.len(), "Geocoded address");
        Ok(locations)
    }
}

/// Raw Nominatim search result
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
}

impl NominatimResult {
    fn to_location(&self) -> Option<GeoLocation> {
        let lat = self.lat.parse().ok()?;
        let lon = self.lon.parse().ok()?;
        GeoLocation::new(lat, lon).ok()
    }
}
