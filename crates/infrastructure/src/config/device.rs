//! Device configuration

use application::ports::PermissionStatus;
use domain::Platform;
use serde::{Deserialize, Serialize};

/// What the host device looks like to the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Platform whose maps and dialer URI schemes are used
    #[serde(default)]
    pub platform: Platform,

    /// Answer given to foreground location permission requests
    #[serde(default = "default_location_permission")]
    pub location_permission: PermissionStatus,
}

const fn default_location_permission() -> PermissionStatus {
    PermissionStatus::Granted
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            location_permission: default_location_permission(),
        }
    }
}

impl DeviceConfig {
    /// Validate the configuration
    ///
    /// Both fields are closed enums, so anything that deserialized is valid.
    pub const fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
