//! Demo binary for the personnel registry.
//!
//! Builds one record of each staff variant, prints their renderings and
//! annual compensations, and reports identifier validation failures through
//! the error path.

use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use staff_registry::calculation::{employee_annual, manager_annual};
use staff_registry::error::RegistryResult;
use staff_registry::models::{Employee, Manager, Person, StaffMember};

fn main() -> RegistryResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let person = Person::new("Arleta", "Nok", "99631963367")?;
    let employee = Employee::new(
        "Zbigniew",
        "Sober",
        "03231705508",
        "Programmer",
        Decimal::new(850000, 2),
    )?;
    let manager = Manager::new(
        "Adam",
        "Weber",
        "45631795507",
        "Head of Department",
        Decimal::new(1200000, 2),
        10,
    )?;

    info!(identifier = %person.identifier(), "constructed person record");

    println!("{person}");
    println!("{employee}");
    println!("{manager}");

    println!("Employee annual compensation: {}", employee_annual(&employee));
    println!("Manager annual compensation: {}", manager_annual(&manager));

    // The variant set renders and dispatches the same way.
    let roster: Vec<StaffMember> = vec![person.into(), employee.into(), manager.into()];
    for member in &roster {
        match staff_registry::calculation::calculate_annual_compensation(member) {
            Some(annual) => info!(member = %member, %annual, "annual compensation"),
            None => info!(member = %member, "no employment record"),
        }
    }

    Ok(())
}
