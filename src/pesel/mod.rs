//! PESEL identifier validation and decoding.
//!
//! This module contains the weighted checksum validation, the birth date
//! decoder with its century bands, and the validated [`Pesel`] identifier
//! type built on top of both.

mod birth_date;
mod checksum;
mod identifier;

pub use birth_date::{BirthDate, decode_birth_date};
pub use checksum::{CHECKSUM_WEIGHTS, IDENTIFIER_LENGTH, control_digit, is_valid, validate};
pub use identifier::Pesel;
