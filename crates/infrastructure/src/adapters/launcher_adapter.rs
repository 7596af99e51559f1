//! Launcher adapters - open maps and dialer URIs on the host

use std::process::Stdio;

use application::error::ApplicationError;
use application::ports::LauncherPort;
use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, instrument};

/// Errors from launching an external app
#[derive(Debug, Error)]
pub enum LauncherError {
    /// The opener command could not be started
    #[error("Failed to start '{command}': {reason}")]
    Spawn {
        /// Command that was run
        command: String,
        /// OS error text
        reason: String,
    },

    /// The opener ran but reported failure
    #[error("'{command}' exited with {status}")]
    ExitStatus {
        /// Command that was run
        command: String,
        /// Exit status text
        status: String,
    },
}

impl From<LauncherError> for ApplicationError {
    fn from(e: LauncherError) -> Self {
        Self::ExternalAppUnavailable(e.to_string())
    }
}

/// Opens URIs with a host opener command such as `xdg-open`
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    command: String,
}

impl SystemLauncher {
    /// Create a launcher running `command <uri>`
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Opener command in use
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    async fn run(&self, uri: &str) -> Result<(), LauncherError> {
        let status = Command::new(&self.command)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| LauncherError::Spawn {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(LauncherError::ExitStatus {
                command: self.command.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl LauncherPort for SystemLauncher {
    #[instrument(skip(self), fields(command = %self.command))]
    async fn open_uri(&self, uri: &str) -> Result<(), ApplicationError> {
        self.run(uri).await?;
        debug!("Opened URI");
        Ok(())
    }
}

/// Records URIs instead of opening them
#[derive(Debug, Default)]
pub struct DryRunLauncher {
    opened: Mutex<Vec<String>>,
}

impl DryRunLauncher {
    /// Create an empty dry-run launcher
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URIs "opened" so far, oldest first
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

#[async_trait]
impl LauncherPort for DryRunLauncher {
    async fn open_uri(&self, uri: &str) -> Result<(), ApplicationError> {
        info!(%uri, "Dry run: not opening URI");
        self.opened.lock().push(uri.to_string());
        Ok(())
    }
}
