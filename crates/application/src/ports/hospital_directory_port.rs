//! Hospital directory port
//!
//! Defines the interface for fetching the remote hospital list.
//! Adapters in the infrastructure layer implement this port over HTTP.

use async_trait::async_trait;
use domain::HospitalRecord;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A directory entry as delivered, before name validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Hospital name; may be missing or blank in the source data
    pub name: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// Region (city or regency)
    pub region: Option<String>,
    /// Province
    pub province: Option<String>,
    /// Listed phone number
    pub phone: Option<String>,
}

impl DirectoryEntry {
    /// Entry with only a name, mostly for tests and fixtures
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Convert into a validated record; `None` when the name is missing or blank
    #[must_use]
    pub fn into_record(self) -> Option<HospitalRecord> {
        let record = HospitalRecord::new(self.name?).ok()?;
        Some(
            record
                .with_address(self.address)
                .with_region(self.region)
                .with_province(self.province)
                .with_phone(self.phone),
        )
    }
}

/// Port for the hospital directory service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HospitalDirectoryPort: Send + Sync {
    /// Fetch every entry in the directory, in source order
    ///
    /// Network failures, non-2xx responses, and unparseable bodies all
    /// surface as `ApplicationError::FetchFailure`.
    async fn fetch_entries(&self) -> Result<Vec<DirectoryEntry>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_entry_converts() {
        let record = DirectoryEntry::named("RS A").into_record().unwrap();
        assert_eq!(record.name(), "RS A");
    }

    #[test]
    fn blank_or_missing_name_is_dropped() {
        assert!(DirectoryEntry::default().into_record().is_none());
        assert!(DirectoryEntry::named("").into_record().is_none());
        assert!(DirectoryEntry::named("   ").into_record().is_none());
    }

    #[test]
    fn optional_fields_carry_over() {
        let entry = DirectoryEntry {
            name: Some("RS A".to_string()),
            address: Some("Jl. Merdeka 1".to_string()),
            region: Some("Kota Bandung".to_string()),
            province: Some("Jawa Barat".to_string()),
            phone: None,
        };
        let record = entry.into_record().unwrap();
        assert_eq!(record.address(), Some("Jl. Merdeka 1"));
        assert_eq!(record.region(), Some("Kota Bandung"));
        assert_eq!(record.province(), Some("Jawa Barat"));
        assert_eq!(record.phone(), None);
    }
}
