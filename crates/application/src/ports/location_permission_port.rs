//! Location permission port

use std::fmt;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Outcome of a foreground location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    /// Access granted
    Granted,
    /// Access refused
    Denied,
}

impl PermissionStatus {
    /// Whether geocoding may proceed
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// Port for the device permission capability
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPermissionPort: Send + Sync {
    /// Ask for foreground location access
    async fn request_foreground_permission(&self) -> Result<PermissionStatus, ApplicationError>;
}
