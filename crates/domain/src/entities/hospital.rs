//! Hospital record entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One entry from the hospital directory
///
/// The name is guaranteed non-empty after trimming. Optional fields hold
/// `None` rather than an empty string, so "absent" and "blank" are the same
/// thing everywhere downstream. Records carry no unique identifier; list
/// views key them on name and position (see [`HospitalRecord::list_key`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HospitalPayload")]
pub struct HospitalRecord {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

/// Unvalidated wire shape used when deserializing a record
#[derive(Debug, Deserialize)]
struct HospitalPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    province: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

impl TryFrom<HospitalPayload> for HospitalRecord {
    type Error = DomainError;

    fn try_from(payload: HospitalPayload) -> Result<Self, Self::Error> {
        let name = payload.name.ok_or(DomainError::EmptyHospitalName)?;
        Ok(Self::new(name)?
            .with_address(payload.address)
            .with_region(payload.region)
            .with_province(payload.province)
            .with_phone(payload.phone))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl HospitalRecord {
    /// Create a record with only a name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyHospitalName` if the name is blank after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyHospitalName);
        }
        Ok(Self {
            name,
            address: None,
            region: None,
            province: None,
            phone: None,
        })
    }

    /// Set the street address
    #[must_use]
    pub fn with_address(mut self, address: Option<String>) -> Self {
        self.address = non_blank(address);
        self
    }

    /// Set the region (city or regency)
    #[must_use]
    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = non_blank(region);
        self
    }

    /// Set the province
    #[must_use]
    pub fn with_province(mut self, province: Option<String>) -> Self {
        self.province = non_blank(province);
        self
    }

    /// Set the phone number as listed by the directory
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = non_blank(phone);
        self
    }

    /// Hospital name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Street address, if listed
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Region, if listed
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Province, if listed
    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    /// Phone number exactly as listed, if any
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Address joined with region and province, skipping absent parts
    ///
    /// Returns an empty string when none of the three is present.
    #[must_use]
    pub fn full_address(&self) -> String {
        [self.address(), self.region(), self.province()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Key for list rendering; tolerates duplicate names
    #[must_use]
    pub fn list_key(&self, position: usize) -> String {
        format!("{}-{position}", self.name)
    }

    /// Serialize for passing between screens
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_route_param(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a record passed between screens
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a valid hospital record.
    pub fn from_route_param(param: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(param)
    }
}

impl fmt::Display for HospitalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HospitalRecord {
        HospitalRecord::new("RSUP Persahabatan")
            .unwrap()
            .with_address(Some("Jl. Persahabatan Raya No.1".to_string()))
            .with_region(Some("Kota Jakarta Timur".to_string()))
            .with_province(Some("DKI Jakarta".to_string()))
            .with_phone(Some("(021) 4891708".to_string()))
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(HospitalRecord::new("").is_err());
        assert!(HospitalRecord::new("   ").is_err());
        assert!(HospitalRecord::new("\t\n").is_err());
    }

    #[test]
    fn name_is_kept_verbatim() {
        let hospital = HospitalRecord::new(" RS Harapan ").unwrap();
        assert_eq!(hospital.name(), " RS Harapan ");
    }

    #[test]
    fn blank_optional_fields_become_absent() {
        let hospital = HospitalRecord::new("A")
            .unwrap()
            .with_address(Some("  ".to_string()))
            .with_region(Some(String::new()))
            .with_phone(None);
        assert_eq!(hospital.address(), None);
        assert_eq!(hospital.region(), None);
        assert_eq!(hospital.phone(), None);
    }

    #[test]
    fn full_address_joins_present_parts() {
        assert_eq!(
            sample().full_address(),
            "Jl. Persahabatan Raya No.1, Kota Jakarta Timur, DKI Jakarta"
        );

        let partial = HospitalRecord::new("A")
            .unwrap()
            .with_address(Some("X".to_string()))
            .with_province(Some("Z".to_string()));
        assert_eq!(partial.full_address(), "X, Z");

        let bare = HospitalRecord::new("A").unwrap();
        assert_eq!(bare.full_address(), "");
    }

    #[test]
    fn list_key_includes_position() {
        let hospital = HospitalRecord::new("RS A").unwrap();
        assert_eq!(hospital.list_key(0), "RS A-0");
        assert_eq!(hospital.list_key(7), "RS A-7");
    }

    #[test]
    fn deserializes_directory_payload() {
        let json = r#"{
            "name": "RSUD Dr. Soetomo",
            "address": "Jl. Mayjen Prof. Dr. Moestopo No.6-8",
            "region": "Kota Surabaya, Jawa Timur",
            "phone": "(031) 5501078",
            "province": "Jawa Timur"
        }"#;
        let hospital: HospitalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(hospital.name(), "RSUD Dr. Soetomo");
        assert_eq!(hospital.province(), Some("Jawa Timur"));
        assert_eq!(hospital.phone(), Some("(031) 5501078"));
    }

    #[test]
    fn deserializing_without_name_fails() {
        assert!(serde_json::from_str::<HospitalRecord>(r#"{"address": "X"}"#).is_err());
        assert!(serde_json::from_str::<HospitalRecord>(r#"{"name": null}"#).is_err());
        assert!(serde_json::from_str::<HospitalRecord>(r#"{"name": " "}"#).is_err());
    }

    #[test]
    fn null_phone_is_absent() {
        let hospital: HospitalRecord =
            serde_json::from_str(r#"{"name": "A", "phone": null}"#).unwrap();
        assert_eq!(hospital.phone(), None);
    }

    #[test]
    fn route_param_survives_navigation() {
        let hospital = sample();
        let param = hospital.to_route_param().unwrap();
        assert_eq!(HospitalRecord::from_route_param(&param).unwrap(), hospital);
    }

    #[test]
    fn malformed_route_param_is_rejected() {
        assert!(HospitalRecord::from_route_param("{not json").is_err());
        assert!(HospitalRecord::from_route_param("[]").is_err());
    }
}
