//! The validated PESEL identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, RegistryResult};
use crate::pesel::birth_date::{BirthDate, decode_birth_date};
use crate::pesel::checksum;

/// A validated 11-digit PESEL identifier.
///
/// A `Pesel` can only be obtained through [`Pesel::parse`] (or the equivalent
/// `FromStr`/`TryFrom<String>` conversions), which checks the weighted
/// checksum and decodes the embedded birth date. The value is immutable after
/// construction, so every `Pesel` in the program is valid and decodable.
///
/// Serde support round-trips the identifier as its 11-digit string, running
/// the same validation on deserialization.
///
/// # Examples
///
/// ```
/// use staff_registry::pesel::Pesel;
///
/// let pesel = Pesel::parse("90010100009").unwrap();
/// assert_eq!(pesel.as_str(), "90010100009");
/// assert_eq!(pesel.birth_date().to_string(), "1/1/1990");
///
/// assert!(Pesel::parse("99631963360").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pesel {
    code: String,
    birth_date: BirthDate,
}

impl Pesel {
    /// Parses and validates an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidIdentifier`] if the code is not
    /// exactly 11 decimal digits or its control digit does not match, and
    /// [`RegistryError::MonthOutOfRange`] if the encoded month falls outside
    /// every century band.
    pub fn parse(code: impl Into<String>) -> RegistryResult<Self> {
        let code = code.into();
        checksum::validate(&code)?;
        let birth_date = decode_birth_date(&code)?;
        Ok(Self { code, birth_date })
    }

    /// Returns the identifier as its 11-digit string.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the birth date decoded from the identifier.
    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }
}

impl fmt::Display for Pesel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Pesel {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pesel {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Pesel> for String {
    fn from(pesel: Pesel) -> Self {
        pesel.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ID-001: a checksum-valid, decodable code parses
    #[test]
    fn test_parse_valid_code() {
        let pesel = Pesel::parse("03231705508").unwrap();
        assert_eq!(pesel.as_str(), "03231705508");
        assert_eq!(
            pesel.birth_date(),
            BirthDate { year: 2003, month: 3, day: 17 }
        );
    }

    /// ID-002: a checksum mismatch is rejected at construction
    #[test]
    fn test_parse_rejects_bad_checksum() {
        assert!(matches!(
            Pesel::parse("99631963360").unwrap_err(),
            RegistryError::InvalidIdentifier { .. }
        ));
    }

    /// ID-003: an undecodable month is rejected at construction
    #[test]
    fn test_parse_rejects_out_of_band_month() {
        assert!(matches!(
            Pesel::parse("99200100007").unwrap_err(),
            RegistryError::MonthOutOfRange { month: 20 }
        ));
    }

    #[test]
    fn test_from_str_matches_parse() {
        let parsed: Pesel = "90010100009".parse().unwrap();
        assert_eq!(parsed, Pesel::parse("90010100009").unwrap());
    }

    #[test]
    fn test_display_is_the_raw_code() {
        let pesel = Pesel::parse("90010100009").unwrap();
        assert_eq!(pesel.to_string(), "90010100009");
    }

    #[test]
    fn test_serde_round_trips_as_string() {
        let pesel = Pesel::parse("55211500018").unwrap();
        let json = serde_json::to_string(&pesel).unwrap();
        assert_eq!(json, "\"55211500018\"");

        let back: Pesel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pesel);
        assert_eq!(back.birth_date(), pesel.birth_date());
    }

    #[test]
    fn test_deserialization_validates() {
        let result: Result<Pesel, _> = serde_json::from_str("\"99631963360\"");
        assert!(result.is_err());
    }
}
