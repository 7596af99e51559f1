//! Service wiring from configuration

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{LauncherPort, PermissionStatus};
use application::{
    AddressResolver, DirectoryLoader, ExternalActions, HospitalDetailScreen, HospitalListScreen,
};
use domain::{HospitalRecord, Platform};
use infrastructure::{
    AppConfig, ConfiguredPermissionAdapter, DirectoryAdapter, DryRunLauncher, GeocodingAdapter,
    SystemLauncher,
};
use tracing::debug;

/// Command-line overrides applied on top of the loaded configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// Platform URI conventions
    pub platform: Option<Platform>,
    /// Answer location permission requests with "denied"
    pub deny_location: bool,
    /// Record URIs instead of opening them
    pub dry_run: bool,
}

impl Overrides {
    /// Apply the overrides to `config`
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(platform) = self.platform {
            config.device.platform = platform;
        }
        if self.deny_location {
            config.device.location_permission = PermissionStatus::Denied;
        }
        if self.dry_run {
            config.launcher.dry_run = true;
        }
    }
}

/// Wired services shared by every command
#[derive(Debug)]
pub struct AppContext {
    loader: Arc<DirectoryLoader>,
    resolver: Arc<AddressResolver>,
    actions: Arc<ExternalActions>,
    dry_run: bool,
}

impl AppContext {
    /// Build adapters and services from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be created.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let directory = Arc::new(DirectoryAdapter::new(&config.directory)?);
        let geocoder = Arc::new(GeocodingAdapter::new(&config.geocoding)?);
        let permission = Arc::new(ConfiguredPermissionAdapter::new(
            config.device.location_permission,
        ));
        let launcher: Arc<dyn LauncherPort> = if config.launcher.dry_run {
            Arc::new(DryRunLauncher::new())
        } else {
            Arc::new(SystemLauncher::new(config.launcher.command.clone()))
        };

        debug!(
            platform = %config.device.platform,
            permission = %config.device.location_permission,
            dry_run = config.launcher.dry_run,
            "Services wired"
        );

        Ok(Self {
            loader: Arc::new(DirectoryLoader::new(directory)),
            resolver: Arc::new(AddressResolver::new(permission, geocoder)),
            actions: Arc::new(ExternalActions::new(launcher, config.device.platform)),
            dry_run: config.launcher.dry_run,
        })
    }

    /// A fresh, unmounted list screen
    pub fn list_screen(&self) -> HospitalListScreen {
        HospitalListScreen::new(Arc::clone(&self.loader))
    }

    /// Navigate to the detail screen for `hospital`
    ///
    /// The record travels as a serialized route parameter, the same way a
    /// list row hands it over.
    pub fn detail_screen(
        &self,
        hospital: &HospitalRecord,
    ) -> Result<HospitalDetailScreen, ApplicationError> {
        let param = hospital
            .to_route_param()
            .map_err(|e| ApplicationError::ParseFailure(e.to_string()))?;
        self.detail_screen_from_param(Some(&param))
    }

    /// Enter the detail screen from a raw route parameter
    pub fn detail_screen_from_param(
        &self,
        param: Option<&str>,
    ) -> Result<HospitalDetailScreen, ApplicationError> {
        HospitalDetailScreen::enter(
            param,
            Arc::clone(&self.resolver),
            Arc::clone(&self.actions),
        )
    }

    /// Whether URIs are only recorded
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }
}
