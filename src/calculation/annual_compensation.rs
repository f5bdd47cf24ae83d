//! Annual compensation calculation.
//!
//! This module computes yearly pay for the staff variants. Each function is
//! a pure read of the record's current fields; nothing is mutated and there
//! are no error paths.

use rust_decimal::Decimal;

use crate::models::{Employee, Manager, StaffMember};

/// Returns the number of monthly pays in a year: 12.
pub fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// Computes an employee's annual compensation: `base_pay × 12`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use staff_registry::calculation::employee_annual;
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
/// assert_eq!(employee_annual(&employee), Decimal::new(10200000, 2));
/// ```
pub fn employee_annual(employee: &Employee) -> Decimal {
    employee.base_pay() * months_per_year()
}

/// Computes a manager's annual compensation:
/// `(base_pay + pay_supplement) × 12`.
///
/// The supplement is used exactly as stored. If it was set directly rather
/// than derived from the subordinate count, the stored value still applies.
pub fn manager_annual(manager: &Manager) -> Decimal {
    (manager.employee().base_pay() + manager.pay_supplement()) * months_per_year()
}

/// Computes annual compensation for any staff member.
///
/// A single match on the variant tag selects the rule: employees earn
/// `base_pay × 12`, managers earn `(base_pay + pay_supplement) × 12`, and a
/// person with no employment record earns nothing (`None`).
pub fn calculate_annual_compensation(member: &StaffMember) -> Option<Decimal> {
    match member {
        StaffMember::Person(_) => None,
        StaffMember::Employee(employee) => Some(employee_annual(employee)),
        StaffMember::Manager(manager) => Some(manager_annual(manager)),
    }
}
