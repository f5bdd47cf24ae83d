//! Employee and manager records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RegistryResult;
use crate::models::Person;

/// Returns the pay supplement granted per subordinate: 100.00.
///
/// A manager's supplement defaults to this amount times the subordinate
/// count, and is re-derived whenever the count changes.
pub fn supplement_per_subordinate() -> Decimal {
    Decimal::new(10000, 2)
}

/// An employee: a person with a title and a monthly base pay.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use staff_registry::models::Employee;
///
/// let employee = Employee::new(
///     "Zbigniew",
///     "Sober",
///     "03231705508",
///     "Programmer",
///     Decimal::new(850000, 2),
/// )
/// .unwrap();
/// assert_eq!(employee.title(), "Programmer");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    person: Person,
    title: String,
    base_pay: Decimal,
}

impl Employee {
    /// Creates an employee, validating the identifier.
    ///
    /// # Errors
    ///
    /// Returns the identifier validation error; no employee is constructed
    /// in that case.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        identifier: &str,
        title: impl Into<String>,
        base_pay: Decimal,
    ) -> RegistryResult<Self> {
        Ok(Self {
            person: Person::new(first_name, last_name, identifier)?,
            title: title.into(),
            base_pay,
        })
    }

    /// Returns the underlying person record.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Returns a mutable reference to the underlying person record.
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Returns the job title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the monthly base pay.
    pub fn base_pay(&self) -> Decimal {
        self.base_pay
    }

    /// Sets the job title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the monthly base pay.
    pub fn set_base_pay(&mut self, base_pay: Decimal) {
        self.base_pay = base_pay;
    }
}

impl fmt::Display for Employee {
    /// Appends `"; title: <title>; pay: <base pay>"` to the person
    /// rendering, with pay at two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; title: {}; pay: {:.2}",
            self.person, self.title, self.base_pay
        )
    }
}

/// A manager: an employee with subordinates and a pay supplement.
///
/// The supplement starts out derived from the subordinate count (see
/// [`supplement_per_subordinate`]) but can be set to any amount afterwards.
/// Changing the subordinate count re-derives it, overwriting a manually set
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    #[serde(flatten)]
    employee: Employee,
    subordinate_count: u32,
    pay_supplement: Decimal,
}

impl Manager {
    /// Creates a manager with the supplement derived from the subordinate
    /// count.
    ///
    /// # Errors
    ///
    /// Returns the identifier validation error; no manager is constructed
    /// in that case.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        identifier: &str,
        title: impl Into<String>,
        base_pay: Decimal,
        subordinate_count: u32,
    ) -> RegistryResult<Self> {
        let employee = Employee::new(first_name, last_name, identifier, title, base_pay)?;
        Ok(Self::from_employee(employee, subordinate_count))
    }

    /// Promotes an existing employee, deriving the supplement from the
    /// subordinate count.
    pub fn from_employee(employee: Employee, subordinate_count: u32) -> Self {
        Self {
            employee,
            subordinate_count,
            pay_supplement: derived_supplement(subordinate_count),
        }
    }

    /// Returns the underlying employee record.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Returns a mutable reference to the underlying employee record.
    pub fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    /// Returns the underlying person record.
    pub fn person(&self) -> &Person {
        self.employee.person()
    }

    /// Returns the number of subordinates.
    pub fn subordinate_count(&self) -> u32 {
        self.subordinate_count
    }

    /// Returns the current pay supplement.
    pub fn pay_supplement(&self) -> Decimal {
        self.pay_supplement
    }

    /// Sets the subordinate count and re-derives the supplement from it,
    /// overwriting any manually set value.
    pub fn set_subordinate_count(&mut self, count: u32) {
        self.subordinate_count = count;
        self.pay_supplement = derived_supplement(count);
    }

    /// Sets the pay supplement directly, bypassing the derivation.
    pub fn set_pay_supplement(&mut self, supplement: Decimal) {
        self.pay_supplement = supplement;
    }
}

impl fmt::Display for Manager {
    /// Appends `"; subordinates: <count>; pay supplement: <supplement>"` to
    /// the employee rendering, with the supplement at two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; subordinates: {}; pay supplement: {:.2}",
            self.employee, self.subordinate_count, self.pay_supplement
        )
    }
}

fn derived_supplement(subordinate_count: u32) -> Decimal {
    Decimal::from(subordinate_count) * supplement_per_subordinate()
}
