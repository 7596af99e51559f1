//! Map region value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;

/// A map frame: a center coordinate plus zoom deltas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRegion {
    /// Center latitude in degrees
    pub latitude: f64,
    /// Center longitude in degrees
    pub longitude: f64,
    /// Vertical span in degrees
    pub latitude_delta: f64,
    /// Horizontal span in degrees
    pub longitude_delta: f64,
}

impl GeoRegion {
    /// Zoom delta used for hospital detail maps
    pub const DEFAULT_DELTA: f64 = 0.01;

    /// Frame a location at the default zoom
    #[must_use]
    pub const fn around(location: GeoLocation) -> Self {
        Self {
            latitude: location.latitude(),
            longitude: location.longitude(),
            latitude_delta: Self::DEFAULT_DELTA,
            longitude_delta: Self::DEFAULT_DELTA,
        }
    }

    /// Compact `lat,lng` form used inside map URIs
    #[must_use]
    pub fn lat_lng(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}, {:.6} (±{}°/±{}°)",
            self.latitude, self.longitude, self.latitude_delta, self.longitude_delta
        )
    }
}
