//! Forward geocoding integration for Vino
//!
//! Converts free-form Indonesian addresses into coordinates using the
//! [Nominatim](https://nominatim.openstreetmap.org) API. Requests are
//! spaced according to the Nominatim usage policy. Results are never
//! cached: every lookup goes to the service.

mod client;
mod config;
mod error;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
