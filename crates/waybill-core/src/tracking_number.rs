use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// The character alphabet tracking numbers are drawn from.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Maximum length of a tracking number.
pub const MAX_LENGTH: usize = 16;

/// A validated tracking number.
///
/// Tracking numbers are 1-16 characters long and contain only
/// uppercase ASCII letters and digits (the pattern `^[A-Z0-9]{1,16}$`).
/// Once produced a tracking number is never mutated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrackingNumber(SmolStr);

impl TrackingNumber {
    /// Creates a new `TrackingNumber` after validating the input.
    pub fn new(number: impl Into<String>) -> Result<Self, CoreError> {
        let number = number.into();
        Self::validate(&number)?;
        Ok(Self(SmolStr::new(number)))
    }

    /// Returns the tracking number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(number: &str) -> Result<(), CoreError> {
        if number.is_empty() || number.len() > MAX_LENGTH {
            return Err(CoreError::InvalidTrackingNumber(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                number.len()
            )));
        }

        if !number
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(CoreError::InvalidTrackingNumber(format!(
                "must contain only uppercase letters and digits: '{}'",
                number
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TrackingNumber").field(&self.0).finish()
    }
}

impl Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TrackingNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TrackingNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::validate(&s).map_err(serde::de::Error::custom)?;
        Ok(Self(s))
    }
}
