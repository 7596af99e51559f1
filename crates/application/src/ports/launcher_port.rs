//! External app launcher port
//!
//! Hands a URI (maps, dialer) to the operating system.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for opening URIs in external apps
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LauncherPort: Send + Sync {
    /// Open the URI with whatever app the OS registers for its scheme
    ///
    /// Returns `ApplicationError::ExternalAppUnavailable` if no handler
    /// accepts it.
    async fn open_uri(&self, uri: &str) -> Result<(), ApplicationError>;
}
