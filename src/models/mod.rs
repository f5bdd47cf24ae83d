//! Core data models for the personnel registry.
//!
//! This module contains the person, employee and manager records and the
//! closed [`StaffMember`] variant set built from them.

mod member;
mod person;
mod staff;

pub use member::StaffMember;
pub use person::Person;
pub use staff::{Employee, Manager, supplement_per_subordinate};
