//! Geocoding port
//!
//! Resolves free-text addresses to coordinates. Implementations are treated
//! as unreliable: callers query them through a fallback ladder.

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for address geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Geocode a free-text address
    ///
    /// Returns zero or more coordinates, best match first. An empty result is
    /// not an error.
    async fn geocode(&self, address: &str) -> Result<Vec<GeoLocation>, ApplicationError>;
}
