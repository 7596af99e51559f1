//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Hospital name is missing or blank
    #[error("Invalid hospital: name must not be empty")]
    EmptyHospitalName,

    /// Phone number contains no dialable digits
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    /// Unknown platform identifier
    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_error_message() {
        assert_eq!(
            DomainError::EmptyHospitalName.to_string(),
            "Invalid hospital: name must not be empty"
        );
    }

    #[test]
    fn invalid_phone_error_message() {
        let err = DomainError::InvalidPhoneNumber("n/a".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: n/a");
    }

    #[test]
    fn invalid_platform_error_message() {
        let err = DomainError::InvalidPlatform("symbian".to_string());
        assert_eq!(err.to_string(), "Invalid platform: symbian");
    }
}
