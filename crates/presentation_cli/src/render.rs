//! Plain-text rendering of screens and action outcomes

use std::fmt::Write as _;

use application::{ActionOutcome, GeocodeState, NO_MATCHES_MESSAGE};
use domain::HospitalRecord;

const NOT_AVAILABLE: &str = "N/A";

/// Numbered hospital list, or the no-matches notice
pub fn hospital_list(hospitals: &[HospitalRecord]) -> String {
    if hospitals.is_empty() {
        return NO_MATCHES_MESSAGE.to_string();
    }

    let mut out = String::new();
    for (position, hospital) in hospitals.iter().enumerate() {
        let _ = writeln!(out, "{:>4}. {}", position + 1, hospital.name());
        let _ = writeln!(
            out,
            "      {}",
            hospital.address().unwrap_or(NOT_AVAILABLE)
        );
    }
    out
}

/// Detail view of one hospital with its map state
pub fn hospital_detail(hospital: &HospitalRecord, map: &GeocodeState) -> String {
    let field = |value: Option<&str>| value.unwrap_or(NOT_AVAILABLE).to_string();

    let mut out = String::new();
    let _ = writeln!(out, "{}", hospital.name());
    let _ = writeln!(out, "  Address:  {}", field(hospital.address()));
    let _ = writeln!(out, "  Region:   {}", field(hospital.region()));
    let _ = writeln!(out, "  Province: {}", field(hospital.province()));
    let _ = writeln!(out, "  Phone:    {}", field(hospital.phone()));
    let _ = writeln!(out, "  Map:      {}", map_line(map));
    out
}

fn map_line(map: &GeocodeState) -> String {
    match map {
        GeocodeState::Idle | GeocodeState::RequestingPermission => "Loading map...".to_string(),
        GeocodeState::Geocoding { attempt, query } => {
            format!("Loading map... (attempt {attempt}: {query})")
        },
        GeocodeState::Resolved(region) => region.to_string(),
        GeocodeState::Failed(message) => message.clone(),
    }
}

/// Result line for an external action
pub fn action_outcome(outcome: &ActionOutcome, dry_run: bool) -> String {
    match outcome {
        ActionOutcome::Launched { uri } if dry_run => format!("Would open {uri}"),
        ActionOutcome::Launched { uri } => format!("Opened {uri}"),
        ActionOutcome::Alert(alert) => alert.to_string(),
    }
}
