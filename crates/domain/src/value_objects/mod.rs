//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod geo_region;
mod phone_number;
mod platform;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use geo_region::GeoRegion;
pub use phone_number::PhoneNumber;
pub use platform::Platform;
