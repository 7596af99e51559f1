//! Mobile platform family

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Platform family whose URI conventions are used for external apps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple Maps (`maps:`) and `telprompt:` dialing
    Ios,
    /// `geo:` intents and `tel:` dialing
    #[default]
    Android,
}

impl Platform {
    /// Config key for this platform
    #[must_use]
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config_key())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" | "iphone" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            other => Err(DomainError::InvalidPlatform(other.to_string())),
        }
    }
}
