//! Personnel Registry
//!
//! This crate models people, employees and managers as a closed set of staff
//! variants, validates PESEL national identification numbers, decodes the
//! birth date embedded in them, and calculates annual compensation.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod pesel;
