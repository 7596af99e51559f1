//! Hospital detail screen
//!
//! Entered with a serialized hospital record. Entering starts address
//! resolution in the screen's scope; leaving aborts it.

use std::fmt;
use std::sync::Arc;

use domain::HospitalRecord;
use tracing::error;

use super::address_resolver::{AddressResolver, GeocodeState};
use super::external_actions::{ActionOutcome, ExternalActions};
use super::screen_scope::ScreenScope;
use crate::error::ApplicationError;

/// State behind the hospital detail view
pub struct HospitalDetailScreen {
    hospital: HospitalRecord,
    scope: ScreenScope<GeocodeState>,
    actions: Arc<ExternalActions>,
}

impl fmt::Debug for HospitalDetailScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HospitalDetailScreen")
            .field("hospital", &self.hospital.name())
            .field("closed", &self.scope.is_closed())
            .finish_non_exhaustive()
    }
}

impl HospitalDetailScreen {
    /// Enter the screen from a route parameter
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoHospitalData` when the parameter is
    /// missing and `ApplicationError::ParseFailure` when it does not hold a
    /// valid hospital record.
    pub fn enter(
        route_param: Option<&str>,
        resolver: Arc<AddressResolver>,
        actions: Arc<ExternalActions>,
    ) -> Result<Self, ApplicationError> {
        let param = route_param.ok_or(ApplicationError::NoHospitalData)?;
        let hospital = HospitalRecord::from_route_param(param).map_err(|e| {
            error!(error = %e, "Error parsing hospital data");
            ApplicationError::ParseFailure(e.to_string())
        })?;
        Ok(Self::open(hospital, resolver, actions))
    }

    /// Open the screen for an already parsed hospital
    pub fn open(
        hospital: HospitalRecord,
        resolver: Arc<AddressResolver>,
        actions: Arc<ExternalActions>,
    ) -> Self {
        let mut scope = ScreenScope::new(GeocodeState::Idle);
        let selected = hospital.clone();
        scope.spawn(move |publisher| async move {
            resolver
                .resolve_observed(&selected, |state| {
                    publisher.publish(state.clone());
                })
                .await;
        });

        Self {
            hospital,
            scope,
            actions,
        }
    }

    /// Selected hospital
    pub const fn hospital(&self) -> &HospitalRecord {
        &self.hospital
    }

    /// Current map state
    pub fn map_state(&self) -> GeocodeState {
        self.scope.state()
    }

    /// Wait for address resolution to finish
    pub async fn map_settled(&self) -> GeocodeState {
        self.scope.settled(GeocodeState::is_terminal).await
    }

    /// Open the hospital in the external maps app
    pub async fn open_in_maps(&self) -> ActionOutcome {
        let region = self.scope.inspect(|state| state.region().copied());
        self.actions.open_in_maps(&self.hospital, region.as_ref()).await
    }

    /// Dial the hospital
    pub async fn call(&self) -> ActionOutcome {
        self.actions.call(&self.hospital).await
    }

    /// Leave the screen; pending resolution is abandoned
    pub fn leave(&mut self) {
        self.scope.close();
    }
}
