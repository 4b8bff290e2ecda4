//! First-revision data source: a seeded in-memory roster mutated directly
//! on the client, with no remote calls involved.

use chrono::Local;
use thiserror::Error;

use shared::domain::{EmployeeId, EmployeeStatus};

use crate::roster::{self, Employee};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MockRosterError {
    #[error("no employee with id {}", (.0).0)]
    UnknownEmployee(EmployeeId),
}

/// In-memory roster with client-side check-in/out mutation. Lookups use the
/// numeric employee id as the sole key; a miss leaves the roster untouched.
pub struct MockRoster {
    employees: Vec<Employee>,
}

impl MockRoster {
    pub fn seeded() -> Self {
        Self {
            employees: seed_roster(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Marks an arrival: status becomes active, the given time is stamped as
    /// check-in, and any stale check-out time is cleared.
    pub fn check_in_at(
        &mut self,
        id: EmployeeId,
        time: &str,
    ) -> Result<&Employee, MockRosterError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or(MockRosterError::UnknownEmployee(id))?;
        employee.status = EmployeeStatus::Active;
        employee.check_in_time = Some(time.to_string());
        employee.check_out_time = None;
        Ok(employee)
    }

    /// Marks a departure: status becomes offline and the given time is
    /// stamped as check-out. The check-in time is kept for the day view.
    pub fn check_out_at(
        &mut self,
        id: EmployeeId,
        time: &str,
    ) -> Result<&Employee, MockRosterError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or(MockRosterError::UnknownEmployee(id))?;
        employee.status = EmployeeStatus::Offline;
        employee.check_out_time = Some(time.to_string());
        Ok(employee)
    }

    pub fn active_count(&self) -> usize {
        roster::active_count(&self.employees)
    }

    pub fn total_hours(&self) -> f32 {
        roster::total_hours(&self.employees)
    }
}

/// Local wall-clock time formatted the way the roster displays it.
pub fn wall_clock_stamp() -> String {
    Local::now().format("%H:%M").to_string()
}

fn seed_roster() -> Vec<Employee> {
    vec![
        Employee {
            id: EmployeeId(1),
            name: "Ivan Petrov".to_string(),
            position: "Foreman".to_string(),
            status: EmployeeStatus::Active,
            phone: "+7 (999) 123-45-67".to_string(),
            check_in_time: Some("08:00".to_string()),
            check_out_time: None,
            hours_today: 4.5,
        },
        Employee {
            id: EmployeeId(2),
            name: "Anna Sidorova".to_string(),
            position: "Engineer".to_string(),
            status: EmployeeStatus::Active,
            phone: "+7 (999) 234-56-78".to_string(),
            check_in_time: Some("08:15".to_string()),
            check_out_time: None,
            hours_today: 4.25,
        },
        Employee {
            id: EmployeeId(3),
            name: "Mikhail Kozlov".to_string(),
            position: "Installer".to_string(),
            status: EmployeeStatus::OnBreak,
            phone: "+7 (999) 345-67-89".to_string(),
            check_in_time: Some("07:45".to_string()),
            check_out_time: None,
            hours_today: 3.5,
        },
        Employee {
            id: EmployeeId(4),
            name: "Elena Volkova".to_string(),
            position: "Technician".to_string(),
            status: EmployeeStatus::Offline,
            phone: "+7 (999) 456-78-90".to_string(),
            check_in_time: None,
            check_out_time: Some("17:00".to_string()),
            hours_today: 8.0,
        },
    ]
}
