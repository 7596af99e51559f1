//! Case-insensitive substring filter over the loaded directory

use domain::HospitalRecord;

/// Records whose name, address, or region contains the query
///
/// An empty query returns every record. Matching is a case-insensitive
/// substring test; province and phone are never consulted. The result keeps
/// source order and is recomputed from scratch on every call.
pub fn filter_hospitals<'a>(hospitals: &'a [HospitalRecord], query: &str) -> Vec<&'a HospitalRecord> {
    if query.is_empty() {
        return hospitals.iter().collect();
    }

    let needle = query.to_lowercase();
    hospitals
        .iter()
        .filter(|hospital| matches_query(hospital, &needle))
        .collect()
}

/// Predicate behind [`filter_hospitals`]; `needle` must already be lowercase
pub fn matches_query(hospital: &HospitalRecord, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(hospital.name())
        || hospital.address().is_some_and(contains)
        || hospital.region().is_some_and(contains)
}
