//! Directory wire models

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One hospital as published by the directory
///
/// Every field is optional: the feed is hand-maintained and entries with a
/// missing name, `null` phone, or non-string values do occur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalEntry {
    /// Hospital name
    pub name: Option<String>,
    /// Street address
    pub address: Option<String>,
    /// Region (city or regency, sometimes with province)
    pub region: Option<String>,
    /// Province
    pub province: Option<String>,
    /// Phone number(s), free-form
    pub phone: Option<String>,
}

impl HospitalEntry {
    /// Read an entry from an arbitrary JSON value
    ///
    /// Non-object values produce an empty entry; non-string fields are
    /// treated as absent.
    pub(crate) fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            name: field("name"),
            address: field("address"),
            region: field("region"),
            province: field("province"),
            phone: field("phone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_all_fields() {
        let entry = HospitalEntry::from_value(&json!({
            "name": "RSUD Dr. Zainoel Abidin",
            "address": "Jl. Tgk. Daud Beureueh No.108",
            "region": "Kota Banda Aceh, Aceh",
            "phone": "(0651) 34565",
            "province": "Aceh"
        }));
        assert_eq!(entry.name.as_deref(), Some("RSUD Dr. Zainoel Abidin"));
        assert_eq!(entry.region.as_deref(), Some("Kota Banda Aceh, Aceh"));
        assert_eq!(entry.phone.as_deref(), Some("(0651) 34565"));
        assert_eq!(entry.province.as_deref(), Some("Aceh"));
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let entry = HospitalEntry::from_value(&json!({"name": "RS A", "phone": null}));
        assert_eq!(entry.name.as_deref(), Some("RS A"));
        assert!(entry.phone.is_none());
        assert!(entry.address.is_none());
    }

    #[test]
    fn non_string_fields_are_absent() {
        let entry = HospitalEntry::from_value(&json!({"name": 42, "phone": 6221}));
        assert!(entry.name.is_none());
        assert!(entry.phone.is_none());
    }

    #[test]
    fn non_object_is_empty() {
        assert_eq!(HospitalEntry::from_value(&json!("RS A")), HospitalEntry::default());
        assert_eq!(HospitalEntry::from_value(&Value::Null), HospitalEntry::default());
    }
}
