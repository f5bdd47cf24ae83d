//! Error types for the personnel registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating and decoding
//! identifiers.

use thiserror::Error;

/// The main error type for the personnel registry.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staff_registry::error::RegistryError;
///
/// let error = RegistryError::InvalidIdentifier {
///     message: "expected exactly 11 decimal digits".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid identifier: expected exactly 11 decimal digits"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RegistryError {
    /// An identifier failed the format or checksum check.
    #[error("Invalid identifier: {message}")]
    InvalidIdentifier {
        /// A description of what made the identifier invalid.
        message: String,
    },

    /// The encoded month of an identifier falls outside every century band.
    #[error("Month code {month} is outside every century band")]
    MonthOutOfRange {
        /// The raw month code taken from digits 2-3 of the identifier.
        month: u32,
    },
}

/// A type alias for Results that return RegistryError.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_displays_message() {
        let error = RegistryError::InvalidIdentifier {
            message: "control digit mismatch: computed 7, found 0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid identifier: control digit mismatch: computed 7, found 0"
        );
    }

    #[test]
    fn test_month_out_of_range_displays_month() {
        let error = RegistryError::MonthOutOfRange { month: 20 };
        assert_eq!(
            error.to_string(),
            "Month code 20 is outside every century band"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RegistryError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_identifier() -> RegistryResult<()> {
            Err(RegistryError::InvalidIdentifier {
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> RegistryResult<()> {
            returns_invalid_identifier()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
