//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the directory and
//! geocoding HTTP clients, the configured location policy, and the OS
//! launcher. Also owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, DeviceConfig, LauncherConfig, LogFormat, TelemetryAppConfig};
pub use telemetry::{init_tracing, log_filter_from_verbosity};
