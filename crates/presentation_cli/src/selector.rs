//! Hospital selection on the command line

use std::fmt;
use std::str::FromStr;

use domain::HospitalRecord;

/// A reference to one hospital in a displayed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 1-based list position, written `3` or `#3`
    Index(usize),
    /// Exact hospital name, compared case-insensitively
    Name(String),
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("selector must not be empty".to_string());
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if let Ok(index) = digits.parse::<usize>() {
            if index == 0 {
                return Err("list positions start at 1".to_string());
            }
            return Ok(Self::Index(index));
        }

        if trimmed.starts_with('#') {
            return Err(format!("'{trimmed}' is not a list position"));
        }
        Ok(Self::Name(trimmed.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

impl Selector {
    /// Zero-based position of the selected hospital in `hospitals`
    pub fn position(&self, hospitals: &[HospitalRecord]) -> Option<usize> {
        match self {
            Self::Index(index) => index.checked_sub(1).filter(|i| *i < hospitals.len()),
            Self::Name(name) => {
                let wanted = name.to_lowercase();
                hospitals
                    .iter()
                    .position(|hospital| hospital.name().trim().to_lowercase() == wanted)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospitals() -> Vec<HospitalRecord> {
        ["RSUD Cengkareng", "RS Persahabatan", "RSPI Sulianti Saroso"]
            .into_iter()
            .map(|name| HospitalRecord::new(name).unwrap())
            .collect()
    }

    #[test]
    fn parses_positions() {
        assert_eq!("3".parse::<Selector>().unwrap(), Selector::Index(3));
        assert_eq!("#12".parse::<Selector>().unwrap(), Selector::Index(12));
        assert_eq!(" 2 ".parse::<Selector>().unwrap(), Selector::Index(2));
    }

    #[test]
    fn parses_names() {
        assert_eq!(
            "RS Persahabatan".parse::<Selector>().unwrap(),
            Selector::Name("RS Persahabatan".to_string())
        );
    }

    #[test]
    fn rejects_bad_selectors() {
        assert!("".parse::<Selector>().is_err());
        assert!("0".parse::<Selector>().is_err());
        assert!("#x".parse::<Selector>().is_err());
    }

    #[test]
    fn picks_by_position() {
        let list = hospitals();
        assert_eq!(Selector::Index(1).position(&list), Some(0));
        assert_eq!(Selector::Index(3).position(&list), Some(2));
        assert!(Selector::Index(4).position(&list).is_none());
    }

    #[test]
    fn picks_by_name_ignoring_case() {
        let list = hospitals();
        let selector = Selector::Name("rspi sulianti saroso".to_string());
        assert_eq!(selector.position(&list), Some(2));
        assert!(Selector::Name("RSPI".to_string()).position(&list).is_none());
    }
}
