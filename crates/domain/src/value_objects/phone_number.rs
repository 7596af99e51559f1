//! Dialable phone number value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A phone number reduced to the digits a dialer accepts
///
/// Directory listings carry free-form numbers such as `(021) 4891708` or
/// `0411-584677/584675`; every non-digit character is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Sanitize a listed phone number
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhoneNumber` if no digits remain.
    pub fn new(listed: impl AsRef<str>) -> Result<Self, DomainError> {
        let listed = listed.as_ref();
        let digits: String = listed.chars().filter(char::is_ascii_digit).collect();

        if digits.is_empty() {
            return Err(DomainError::InvalidPhoneNumber(listed.to_string()));
        }

        Ok(Self { digits })
    }

    /// Digits only
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

impl TryFrom<&str> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
