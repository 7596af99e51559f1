//! External action handlers: open in maps, dial the hospital

use std::fmt;
use std::sync::Arc;

use domain::{GeoRegion, HospitalRecord, PhoneNumber, Platform};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::uri_component;
use crate::ports::LauncherPort;

/// A user-facing notice raised instead of launching an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
}

impl Alert {
    /// Create an alert
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    fn location_not_found() -> Self {
        Self::new("Location Not Found", "Cannot open in maps.")
    }

    fn map_app_unavailable() -> Self {
        Self::new("Error", "Could not open map app.")
    }

    fn no_phone_number() -> Self {
        Self::new(
            "No Phone Number",
            "This hospital does not have a phone number listed.",
        )
    }

    fn dialer_unavailable() -> Self {
        Self::new("Error", "Could not make the call.")
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Result of an external action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The URI was handed to the OS
    Launched {
        /// URI that was opened
        uri: String,
    },
    /// Nothing was launched; the user should see this alert
    Alert(Alert),
}

/// Build the external maps URI for a resolved hospital
///
/// The address query is the URI-encoded `"{name}, {address}"` when an address
/// is listed, otherwise the bare `lat,lng`.
pub fn maps_uri(platform: Platform, hospital: &HospitalRecord, region: &GeoRegion) -> String {
    let lat_lng = region.lat_lng();
    let label = hospital.name();
    let query = hospital.address().map_or_else(
        || lat_lng.clone(),
        |address| uri_component::encode(&format!("{label}, {address}")),
    );

    match platform {
        Platform::Ios => format!("maps:0,0?q={label}@{lat_lng}&q={query}"),
        Platform::Android => format!("geo:0,0?q={lat_lng}({label})?q={query}"),
    }
}

/// Build the dialer URI for a sanitized phone number
pub fn dial_uri(platform: Platform, phone: &PhoneNumber) -> String {
    match platform {
        Platform::Ios => format!("telprompt:{}", phone.digits()),
        Platform::Android => format!("tel:{}", phone.digits()),
    }
}

/// Launches maps and dialer apps for the platform in use
pub struct ExternalActions {
    launcher: Arc<dyn LauncherPort>,
    platform: Platform,
}

impl fmt::Debug for ExternalActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalActions")
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl ExternalActions {
    /// Create handlers that launch through `launcher` using `platform` URI conventions
    pub fn new(launcher: Arc<dyn LauncherPort>, platform: Platform) -> Self {
        Self { launcher, platform }
    }

    /// Platform whose URI templates are used
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Open the hospital in the external maps app
    ///
    /// Requires a resolved region; without one an alert is returned and the
    /// launcher is never called.
    #[instrument(skip(self, hospital, region), fields(hospital = %hospital.name()))]
    pub async fn open_in_maps(
        &self,
        hospital: &HospitalRecord,
        region: Option<&GeoRegion>,
    ) -> ActionOutcome {
        let Some(region) = region else {
            info!("No resolved region; not opening maps");
            return ActionOutcome::Alert(Alert::location_not_found());
        };

        let uri = maps_uri(self.platform, hospital, region);
        match self.launcher.open_uri(&uri).await {
            Ok(()) => ActionOutcome::Launched { uri },
            Err(e) => {
                warn!(%uri, error = %e, "Could not open map app");
                ActionOutcome::Alert(Alert::map_app_unavailable())
            },
        }
    }

    /// Dial the hospital's listed phone number
    #[instrument(skip(self, hospital), fields(hospital = %hospital.name()))]
    pub async fn call(&self, hospital: &HospitalRecord) -> ActionOutcome {
        let Some(phone) = hospital.phone().and_then(|listed| PhoneNumber::new(listed).ok()) else {
            info!("No dialable phone number listed");
            return ActionOutcome::Alert(Alert::no_phone_number());
        };

        let uri = dial_uri(self.platform, &phone);
        match self.launcher.open_uri(&uri).await {
            Ok(()) => ActionOutcome::Launched { uri },
            Err(e) => {
                warn!(%uri, error = %e, "Could not open dialer");
                ActionOutcome::Alert(Alert::dialer_unavailable())
            },
        }
    }
}
