//! The base person record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RegistryResult;
use crate::pesel::{BirthDate, Pesel};

/// A person identified by a validated PESEL identifier.
///
/// The identifier is private and can only be replaced through
/// [`Person::set_identifier`], which validates the new code before swapping
/// it in. A `Person` therefore never holds an invalid identifier, at
/// construction or after any reassignment.
///
/// # Examples
///
/// ```
/// use staff_registry::models::Person;
///
/// let person = Person::new("Arleta", "Nok", "99631963367").unwrap();
/// assert_eq!(person.to_string(), "Arleta Nok; birth date: 19/3/2299");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
    identifier: Pesel,
}

impl Person {
    /// Creates a person, validating the identifier.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the code fails the format or checksum
    /// check, or its month code is undecodable; no person is constructed in
    /// that case.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        identifier: &str,
    ) -> RegistryResult<Self> {
        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            identifier: Pesel::parse(identifier)?,
        })
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the validated identifier.
    pub fn identifier(&self) -> &Pesel {
        &self.identifier
    }

    /// Returns the birth date decoded from the identifier.
    pub fn birth_date(&self) -> BirthDate {
        self.identifier.birth_date()
    }

    /// Sets the first name.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    /// Sets the last name.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Replaces the identifier with a newly validated one.
    ///
    /// The new code is fully validated before the swap; on failure the
    /// previously stored identifier is left untouched and the error is
    /// returned.
    pub fn set_identifier(&mut self, code: &str) -> RegistryResult<()> {
        self.identifier = Pesel::parse(code)?;
        Ok(())
    }
}

impl fmt::Display for Person {
    /// Renders `"<first> <last>; birth date: <day>/<month>/<year>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}; birth date: {}",
            self.first_name,
            self.last_name,
            self.birth_date()
        )
    }
}
