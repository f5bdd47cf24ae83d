//! The closed set of staff variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Employee, Manager, Person};

/// A staff member: a person, an employee or a manager.
///
/// The three variants form a closed specialization chain. Code that needs
/// behavior to vary by role matches on the variant tag instead of relying on
/// virtual dispatch; see
/// [`calculate_annual_compensation`](crate::calculation::calculate_annual_compensation).
///
/// Serialization is internally tagged with a `role` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum StaffMember {
    /// A person with no employment record.
    Person(Person),
    /// An employee drawing a monthly base pay.
    Employee(Employee),
    /// A manager drawing base pay plus a supplement.
    Manager(Manager),
}

impl StaffMember {
    /// Returns the person record common to every variant.
    pub fn person(&self) -> &Person {
        match self {
            StaffMember::Person(person) => person,
            StaffMember::Employee(employee) => employee.person(),
            StaffMember::Manager(manager) => manager.person(),
        }
    }
}

impl fmt::Display for StaffMember {
    /// Delegates to the variant's own rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaffMember::Person(person) => person.fmt(f),
            StaffMember::Employee(employee) => employee.fmt(f),
            StaffMember::Manager(manager) => manager.fmt(f),
        }
    }
}

impl From<Person> for StaffMember {
    fn from(person: Person) -> Self {
        StaffMember::Person(person)
    }
}

impl From<Employee> for StaffMember {
    fn from(employee: Employee) -> Self {
        StaffMember::Employee(employee)
    }
}

impl From<Manager> for StaffMember {
    fn from(manager: Manager) -> Self {
        StaffMember::Manager(manager)
    }
}
