//! Address resolver
//!
//! Turns a selected hospital into a map region. Location permission is
//! requested first; geocoding then walks a fixed fallback ladder:
//!
//! 1. address, region and province joined with `", "`
//! 2. region alone
//! 3. province alone
//!
//! Attempts run strictly one after another and stop at the first one that
//! yields a coordinate. A failing attempt is logged and the ladder moves on.

use std::fmt;
use std::sync::Arc;

use domain::{GeoRegion, HospitalRecord};
use tracing::{debug, error, info, instrument, warn};

use crate::error::{ApplicationError, LOCATION_ERROR_MESSAGE};
use crate::ports::{GeocodingPort, LocationPermissionPort, PermissionStatus};

/// Progress of one address resolution
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeState {
    /// Nothing selected yet
    Idle,
    /// Waiting for the location permission answer
    RequestingPermission,
    /// Running a ladder attempt (1-based)
    Geocoding {
        /// Attempt number, 1 to 3
        attempt: usize,
        /// Address string being geocoded
        query: String,
    },
    /// A coordinate was found
    Resolved(GeoRegion),
    /// Resolution ended without a coordinate; carries the user-facing message
    Failed(String),
}

impl GeocodeState {
    /// Whether resolution has finished, one way or the other
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved(_) | Self::Failed(_))
    }

    /// The resolved region, if any
    #[must_use]
    pub const fn region(&self) -> Option<&GeoRegion> {
        match self {
            Self::Resolved(region) => Some(region),
            _ => None,
        }
    }

    /// The failure message, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Address strings to geocode, in ladder order, skipping empty inputs
///
/// The joined attempt is only made for records that list a street address.
pub fn geocode_attempts(hospital: &HospitalRecord) -> Vec<String> {
    let full_address = hospital.address().map(|_| hospital.full_address());
    [
        full_address.as_deref(),
        hospital.region(),
        hospital.province(),
    ]
    .into_iter()
    .flatten()
    .filter(|attempt| !attempt.trim().is_empty())
    .map(str::to_string)
    .collect()
}

/// Resolves hospitals to map regions
pub struct AddressResolver {
    permission: Arc<dyn LocationPermissionPort>,
    geocoder: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for AddressResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressResolver").finish_non_exhaustive()
    }
}

impl AddressResolver {
    /// Create a resolver over the permission and geocoding ports
    pub fn new(
        permission: Arc<dyn LocationPermissionPort>,
        geocoder: Arc<dyn GeocodingPort>,
    ) -> Self {
        Self {
            permission,
            geocoder,
        }
    }

    /// Resolve a hospital and return the terminal state
    pub async fn resolve(&self, hospital: &HospitalRecord) -> GeocodeState {
        self.resolve_observed(hospital, |_| {}).await
    }

    /// Resolve a hospital, reporting every state transition to `on_state`
    ///
    /// The last state reported is the one returned, and is always terminal.
    #[instrument(skip(self, hospital, on_state), fields(hospital = %hospital.name()))]
    pub async fn resolve_observed<F>(&self, hospital: &HospitalRecord, mut on_state: F) -> GeocodeState
    where
        F: FnMut(&GeocodeState) + Send,
    {
        let state = self.run(hospital, &mut on_state).await;
        on_state(&state);
        state
    }

    async fn run<F>(&self, hospital: &HospitalRecord, on_state: &mut F) -> GeocodeState
    where
        F: FnMut(&GeocodeState) + Send,
    {
        on_state(&GeocodeState::RequestingPermission);
        match self.permission.request_foreground_permission().await {
            Ok(PermissionStatus::Granted) => {},
            Ok(PermissionStatus::Denied) => {
                info!("Location permission denied");
                return GeocodeState::Failed(ApplicationError::PermissionDenied.user_message());
            },
            Err(e) => {
                error!(error = %e, "Location permission request failed");
                return GeocodeState::Failed(LOCATION_ERROR_MESSAGE.to_string());
            },
        }

        for (index, query) in geocode_attempts(hospital).into_iter().enumerate() {
            let attempt = index + 1;
            on_state(&GeocodeState::Geocoding {
                attempt,
                query: query.clone(),
            });

            match self.geocoder.geocode(&query).await {
                Ok(locations) => {
                    if let Some(location) = locations.first() {
                        debug!(attempt, %query, %location, "Geocoding attempt succeeded");
                        return GeocodeState::Resolved(GeoRegion::around(*location));
                    }
                    debug!(attempt, %query, "Geocoding attempt returned no results");
                },
                Err(e) => {
                    warn!(attempt, %query, error = %e, "Geocoding attempt failed");
                },
            }
        }

        let not_found = ApplicationError::GeocodeNotFound {
            name: hospital.name().to_string(),
            address: hospital.full_address(),
        };
        info!(error = %not_found, "All geocoding attempts exhausted");
        GeocodeState::Failed(not_found.user_message())
    }
}
