//! Launcher configuration

use serde::{Deserialize, Serialize};

/// How external maps and dialer URIs are opened
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Opener command; receives the URI as its only argument
    #[serde(default = "default_command")]
    pub command: String,

    /// Record URIs instead of opening them
    #[serde(default)]
    pub dry_run: bool,
}

fn default_command() -> String {
    if cfg!(target_os = "macos") {
        "open".to_string()
    } else if cfg!(target_os = "windows") {
        "explorer".to_string()
    } else {
        "xdg-open".to_string()
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            dry_run: false,
        }
    }
}

impl LauncherConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.dry_run && self.command.trim().is_empty() {
            return Err("command must not be empty unless dry_run is set".to_string());
        }
        Ok(())
    }
}
