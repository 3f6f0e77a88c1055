use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A validated ISO 3166-1 alpha-2 country code.
///
/// Always stored as exactly two uppercase ASCII letters; lowercase
/// input is normalized on construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(SmolStr);

impl CountryCode {
    /// Creates a new `CountryCode` after validating and uppercasing the input.
    pub fn new(code: impl AsRef<str>) -> Result<Self, CoreError> {
        let code = code.as_ref();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidCountryCode(format!(
                "must be exactly two ASCII letters, got '{}'",
                code
            )));
        }
        Ok(Self(SmolStr::new(code.to_ascii_uppercase())))
    }

    /// Returns the country code as a string slice (always uppercase).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert_eq!(CountryCode::new("US").unwrap().as_str(), "US");
        assert_eq!(CountryCode::new("CA").unwrap().as_str(), "CA");
    }

    #[test]
    fn lowercase_is_normalized() {
        assert_eq!(CountryCode::new("sg").unwrap().as_str(), "SG");
        assert_eq!(CountryCode::new("mY").unwrap().as_str(), "MY");
    }

    #[test]
    fn wrong_length() {
        assert!(CountryCode::new("").is_err());
        assert!(CountryCode::new("U").is_err());
        assert!(CountryCode::new("USA").is_err());
    }

    #[test]
    fn non_alphabetic() {
        assert!(CountryCode::new("U1").is_err());
        assert!(CountryCode::new("1A").is_err());
        assert!(CountryCode::new("U ").is_err());
    }
}
