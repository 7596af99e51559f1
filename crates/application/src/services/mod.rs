//! Application services - Use case implementations

mod address_resolver;
mod directory_loader;
mod external_actions;
mod hospital_detail_screen;
mod hospital_list_screen;
mod screen_scope;
mod search_filter;
mod uri_component;

pub use address_resolver::{AddressResolver, GeocodeState, geocode_attempts};
pub use directory_loader::{DirectoryLoader, LoadStatus, retain_named};
pub use external_actions::{ActionOutcome, Alert, ExternalActions, dial_uri, maps_uri};
pub use hospital_detail_screen::HospitalDetailScreen;
pub use hospital_list_screen::{HospitalListScreen, NO_MATCHES_MESSAGE};
pub use screen_scope::{ScreenScope, StatePublisher};
pub use search_filter::{filter_hospitals, matches_query};
