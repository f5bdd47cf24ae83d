//! Weighted checksum validation for PESEL identifiers.
//!
//! This module provides functions for checking that an 11-digit identifier
//! carries a correct control digit under the fixed PESEL weighting scheme.

use crate::error::{RegistryError, RegistryResult};

/// The per-position weights applied to the first 10 digits of an identifier.
pub const CHECKSUM_WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// The exact number of digits in a valid identifier.
pub const IDENTIFIER_LENGTH: usize = 11;

/// Computes the control digit for the first 10 digits of an identifier.
///
/// The control digit is `(10 - (weighted_sum mod 10)) mod 10`, where the
/// weighted sum applies [`CHECKSUM_WEIGHTS`] position by position.
///
/// # Examples
///
/// ```
/// use staff_registry::pesel::control_digit;
///
/// assert_eq!(control_digit(&[9, 0, 0, 1, 0, 1, 0, 0, 0, 0]), 9);
/// ```
pub fn control_digit(first_ten: &[u32; 10]) -> u32 {
    let sum: u32 = first_ten
        .iter()
        .zip(CHECKSUM_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();
    (10 - sum % 10) % 10
}

/// Validates an identifier, reporting why it is invalid.
///
/// An identifier is valid when it consists of exactly 11 ASCII decimal digits
/// and its 11th digit equals the control digit computed over the first 10.
///
/// # Returns
///
/// Returns `Ok(())` for a valid identifier, or [`RegistryError::InvalidIdentifier`]
/// describing the failure: either the code is not exactly 11 decimal digits,
/// or the control digit does not match.
pub fn validate(code: &str) -> RegistryResult<()> {
    let digits = digits_of(code).ok_or_else(|| RegistryError::InvalidIdentifier {
        message: format!(
            "expected exactly {} decimal digits, got {} characters",
            IDENTIFIER_LENGTH,
            code.chars().count()
        ),
    })?;

    let mut first_ten = [0u32; 10];
    first_ten.copy_from_slice(&digits[..10]);
    let expected = control_digit(&first_ten);
    let found = digits[10];

    if expected != found {
        return Err(RegistryError::InvalidIdentifier {
            message: format!("control digit mismatch: computed {expected}, found {found}"),
        });
    }

    Ok(())
}

/// Returns true if the identifier is exactly 11 digits with a matching
/// control digit.
///
/// This is a pure predicate with no side effects; use [`validate`] when the
/// failure reason is needed.
///
/// # Examples
///
/// ```
/// use staff_registry::pesel::is_valid;
///
/// assert!(is_valid("90010100009"));
/// assert!(!is_valid("99631963360"));
/// assert!(!is_valid("123"));
/// ```
pub fn is_valid(code: &str) -> bool {
    validate(code).is_ok()
}

/// Extracts the 11 digits of a code, or `None` if the code is not exactly
/// 11 ASCII decimal digits.
pub(crate) fn digits_of(code: &str) -> Option<[u32; IDENTIFIER_LENGTH]> {
    if code.len() != IDENTIFIER_LENGTH {
        return None;
    }
    let mut digits = [0u32; IDENTIFIER_LENGTH];
    for (slot, ch) in digits.iter_mut().zip(code.chars()) {
        *slot = ch.to_digit(10)?;
    }
    Some(digits)
}
