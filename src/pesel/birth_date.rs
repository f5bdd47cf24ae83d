//! Birth date decoding from PESEL identifiers.
//!
//! This module decodes the year, month and day embedded in the first six
//! digits of an identifier. The century of birth is disambiguated by a
//! constant offset added to the month field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RegistryError, RegistryResult};
use crate::pesel::checksum;

/// A century band: the inclusive month-code range it covers, the offset
/// subtracted from the month code, and the century base year.
#[derive(Debug, Clone, Copy)]
struct CenturyBand {
    month_min: u32,
    month_max: u32,
    month_offset: u32,
    base_year: i32,
}

/// The five century bands of the PESEL month encoding.
///
/// Month codes 13-20, 33-40, 53-60, 73-80 and 93-99 (and 0) fall between
/// bands and are rejected as [`RegistryError::MonthOutOfRange`].
const CENTURY_BANDS: [CenturyBand; 5] = [
    CenturyBand { month_min: 1, month_max: 12, month_offset: 0, base_year: 1900 },
    CenturyBand { month_min: 21, month_max: 32, month_offset: 20, base_year: 2000 },
    CenturyBand { month_min: 41, month_max: 52, month_offset: 40, base_year: 2100 },
    CenturyBand { month_min: 61, month_max: 72, month_offset: 60, base_year: 2200 },
    CenturyBand { month_min: 81, month_max: 92, month_offset: 80, base_year: 1800 },
];

/// A birth date decoded from an identifier.
///
/// Day and month are the raw decoded values; no calendar validation is
/// performed, so a day of 31 in a 30-day month is representable. Use
/// [`BirthDate::to_naive_date`] to obtain a calendar-checked date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    /// The full four-digit year of birth.
    pub year: i32,
    /// The month of birth (1-12 after century decoding).
    pub month: u32,
    /// The day of birth as encoded (not calendar-checked).
    pub day: u32,
}

impl BirthDate {
    /// Converts the decoded date into a calendar-validated [`NaiveDate`].
    ///
    /// Returns `None` for dates that do not exist on the calendar, such as
    /// 31 February.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_registry::pesel::BirthDate;
    ///
    /// let date = BirthDate { year: 1990, month: 1, day: 1 };
    /// assert!(date.to_naive_date().is_some());
    ///
    /// let bad = BirthDate { year: 1990, month: 2, day: 31 };
    /// assert!(bad.to_naive_date().is_none());
    /// ```
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for BirthDate {
    /// Renders the date as unpadded `day/month/year`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Decodes the birth date embedded in an identifier.
///
/// Digits 0-1 hold the two-digit year within the century, digits 2-3 the
/// encoded month, and digits 4-5 the day. The month code selects a century:
///
/// | month code | decoded month | century base |
/// |------------|---------------|--------------|
/// | 1-12       | unchanged     | 1900         |
/// | 21-32      | code − 20     | 2000         |
/// | 41-52      | code − 40     | 2100         |
/// | 61-72      | code − 60     | 2200         |
/// | 81-92      | code − 80     | 1800         |
///
/// The final year is the century base plus the two-digit year.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidIdentifier`] if the code is not exactly
/// 11 decimal digits, and [`RegistryError::MonthOutOfRange`] if the month
/// code falls between the bands (0, 13-20, 33-40, 53-60, 73-80, 93-99).
/// Month codes outside every band are rejected rather than silently mapped
/// to the 1900 band.
///
/// The checksum is not re-checked here; callers are expected to have
/// validated the code first (see [`crate::pesel::Pesel::parse`], which does
/// both).
///
/// # Examples
///
/// ```
/// use staff_registry::pesel::{decode_birth_date, BirthDate};
///
/// let date = decode_birth_date("03231705508").unwrap();
/// assert_eq!(date, BirthDate { year: 2003, month: 3, day: 17 });
/// ```
pub fn decode_birth_date(code: &str) -> RegistryResult<BirthDate> {
    let digits = checksum::digits_of(code).ok_or_else(|| RegistryError::InvalidIdentifier {
        message: format!(
            "expected exactly {} decimal digits, got {} characters",
            checksum::IDENTIFIER_LENGTH,
            code.chars().count()
        ),
    })?;

    let year_in_century = (digits[0] * 10 + digits[1]) as i32;
    let month_code = digits[2] * 10 + digits[3];
    let day = digits[4] * 10 + digits[5];

    let band = CENTURY_BANDS
        .iter()
        .find(|band| (band.month_min..=band.month_max).contains(&month_code))
        .ok_or(RegistryError::MonthOutOfRange { month: month_code })?;

    Ok(BirthDate {
        year: band.base_year + year_in_century,
        month: month_code - band.month_offset,
        day,
    })
}
