//! Location permission adapter backed by configuration

use application::error::ApplicationError;
use application::ports::{LocationPermissionPort, PermissionStatus};
use async_trait::async_trait;
use tracing::debug;

/// Answers permission requests with a fixed, configured policy
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredPermissionAdapter {
    policy: PermissionStatus,
}

impl ConfiguredPermissionAdapter {
    /// Create an adapter that always answers `policy`
    #[must_use]
    pub const fn new(policy: PermissionStatus) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl LocationPermissionPort for ConfiguredPermissionAdapter {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus, ApplicationError> {
        debug!(policy = %self.policy, "Location permission requested");
        Ok(self.policy)
    }
}
