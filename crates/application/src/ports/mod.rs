//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod hospital_directory_port;
mod launcher_port;
mod location_permission_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use hospital_directory_port::{DirectoryEntry, HospitalDirectoryPort};
#[cfg(test)]
pub use hospital_directory_port::MockHospitalDirectoryPort;
pub use launcher_port::LauncherPort;
#[cfg(test)]
pub use launcher_port::MockLauncherPort;
pub use location_permission_port::{LocationPermissionPort, PermissionStatus};
#[cfg(test)]
pub use location_permission_port::MockLocationPermissionPort;
