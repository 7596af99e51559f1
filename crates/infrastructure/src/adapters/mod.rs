//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod directory_adapter;
mod geocoding_adapter;
mod launcher_adapter;
mod permission_adapter;

pub use directory_adapter::DirectoryAdapter;
pub use geocoding_adapter::GeocodingAdapter;
pub use launcher_adapter::{DryRunLauncher, LauncherError, SystemLauncher};
pub use permission_adapter::ConfiguredPermissionAdapter;
