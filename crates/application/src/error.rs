//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Shown when the directory cannot be fetched or parsed
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load hospital data. Please try again later.";

/// Shown when the detail screen receives an unreadable hospital payload
pub const DETAIL_PARSE_MESSAGE: &str = "Failed to load hospital details.";

/// Shown when the detail screen is entered without a hospital
pub const NO_HOSPITAL_MESSAGE: &str = "No hospital data provided.";

/// Shown when location permission is refused
pub const PERMISSION_DENIED_MESSAGE: &str = "Permission to access location was denied.";

/// Shown when the resolver fails outside of an individual geocoding attempt
pub const LOCATION_ERROR_MESSAGE: &str = "Error finding location.";

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Network failure or non-2xx response from the directory
    #[error("Directory fetch failed: {0}")]
    FetchFailure(String),

    /// Malformed hospital payload on detail screen entry
    #[error("Hospital payload could not be parsed: {0}")]
    ParseFailure(String),

    /// Detail screen entered without a payload
    #[error("No hospital payload provided")]
    NoHospitalData,

    /// Location permission refused
    #[error("Location permission denied")]
    PermissionDenied,

    /// A single geocoding call failed
    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    /// Every geocoding attempt came back empty
    #[error("No coordinates found for \"{name}\" (address: {address})")]
    GeocodeNotFound {
        /// Hospital name
        name: String,
        /// Full address that was attempted first
        address: String,
    },

    /// The OS could not open a maps or dialer URI
    #[error("External app unavailable: {0}")]
    ExternalAppUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Message rendered in place of the UI region that failed
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::FetchFailure(_) => LOAD_FAILED_MESSAGE.to_string(),
            Self::ParseFailure(_) => DETAIL_PARSE_MESSAGE.to_string(),
            Self::NoHospitalData => NO_HOSPITAL_MESSAGE.to_string(),
            Self::PermissionDenied => PERMISSION_DENIED_MESSAGE.to_string(),
            Self::Geocoding(_) => LOCATION_ERROR_MESSAGE.to_string(),
            Self::GeocodeNotFound { name, address } => {
                format!("Could not find location for \"{name}\". Address: {address}")
            },
            Self::Domain(_) | Self::ExternalAppUnavailable(_) | Self::Configuration(_) => {
                self.to_string()
            },
        }
    }
}
