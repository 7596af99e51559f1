//! Application configuration
//!
//! Split into focused sub-modules:
//! - `device`: platform URI conventions and the location permission policy
//! - `launcher`: how external URIs are opened
//! - `telemetry`: log output format
//!
//! The `directory` and `geocoding` sections reuse the integration crates'
//! own configuration types.

mod device;
mod launcher;
mod telemetry;

use std::path::Path;

use integration_directory::DirectoryConfig;
use integration_geocoding::NominatimConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use device::DeviceConfig;
pub use launcher::LauncherConfig;
pub use telemetry::{LogFormat, TelemetryAppConfig};

/// Environment variable prefix, e.g. `VINO_DEVICE__PLATFORM=ios`
const ENV_PREFIX: &str = "VINO";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hospital directory API
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Nominatim geocoding
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Device capabilities
    #[serde(default)]
    pub device: DeviceConfig,

    /// External app launcher
    #[serde(default)]
    pub launcher: LauncherConfig,

    /// Logging output
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file, and environment
    ///
    /// Without an explicit `path`, `config.{toml,json,yaml}` in the working
    /// directory is used when present. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .set_default("directory.timeout_secs", 30)?
            .set_default("geocoding.country_filter", "id")?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config
            .validate()
            .map_err(config::ConfigError::Message)?;

        debug!(
            directory = %config.directory.base_url,
            geocoding = %config.geocoding.base_url,
            platform = %config.device.platform,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error, prefixed with the section name.
    pub fn validate(&self) -> Result<(), String> {
        self.directory
            .validate()
            .map_err(|e| format!("directory: {e}"))?;
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.device.validate().map_err(|e| format!("device: {e}"))?;
        self.launcher
            .validate()
            .map_err(|e| format!("launcher: {e}"))?;
        self.telemetry
            .validate()
            .map_err(|e| format!("telemetry: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::ports::PermissionStatus;
    use domain::Platform;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Some(map)
    }

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(
            config.directory.base_url,
            "https://dekontaminasi.com/api/id/covid19"
        );
        assert_eq!(config.geocoding.country_filter, "id");
        assert_eq!(config.device.platform, Platform::Android);
        assert_eq!(config.device.location_permission, PermissionStatus::Granted);
        assert!(!config.launcher.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_without_sources_uses_defaults() {
        let config = AppConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config.directory.timeout_secs, 30);
        assert_eq!(config.geocoding.country_filter, "id");
    }

    #[test]
    fn load_from_file() {
        let file = toml_file(
            r#"
[directory]
base_url = "http://localhost:9000/api"
timeout_secs = 12

[device]
platform = "ios"
location_permission = "denied"

[launcher]
dry_run = true
"#,
        );

        let config = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap();

        assert_eq!(config.directory.base_url, "http://localhost:9000/api");
        assert_eq!(config.directory.timeout_secs, 12);
        assert_eq!(config.device.platform, Platform::Ios);
        assert_eq!(config.device.location_permission, PermissionStatus::Denied);
        assert!(config.launcher.dry_run);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[directory]\ntimeout_secs = 12\n");

        let config = AppConfig::load_with_env(
            Some(file.path()),
            env(&[
                ("VINO_DIRECTORY__TIMEOUT_SECS", "45"),
                ("VINO_DEVICE__PLATFORM", "ios"),
                ("VINO_GEOCODING__MAX_RESULTS", "3"),
            ]),
        )
        .unwrap();

        assert_eq!(config.directory.timeout_secs, 45);
        assert_eq!(config.device.platform, Platform::Ios);
        assert_eq!(config.geocoding.max_results, 3);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load_with_env(Some(&path), env(&[])).is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = toml_file("[directory]\ntimeout_secs = 0\n");
        let err = AppConfig::load_with_env(Some(file.path()), env(&[])).unwrap_err();
        assert!(err.to_string().contains("directory"));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let file = toml_file("[device]\nplatform = \"symbian\"\n");
        assert!(AppConfig::load_with_env(Some(file.path()), env(&[])).is_err());
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.launcher.command, config.launcher.command);
        assert_eq!(parsed.device.platform, config.device.platform);
    }
}
