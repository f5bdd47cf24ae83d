//! Calculation logic for the personnel registry.
//!
//! This module contains the annual compensation rules for the staff
//! variants and the single dispatch over them.

mod annual_compensation;

pub use annual_compensation::{
    calculate_annual_compensation, employee_annual, manager_annual, months_per_year,
};
