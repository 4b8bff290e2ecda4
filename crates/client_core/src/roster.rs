//! Denormalized roster model rendered by the dashboard.

use shared::{
    domain::{EmployeeId, EmployeeStatus},
    protocol::EmployeeRecord,
};

/// One roster row as the UI shows it. The recorded times and the hours
/// figure only ever carry data in mock mode; live snapshots leave them
/// empty because the wire roster does not include them.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub phone: String,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub hours_today: f32,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: record.id,
            name: record.full_name,
            position: record.position,
            status: record.status,
            phone: record.phone,
            check_in_time: None,
            check_out_time: None,
            hours_today: 0.0,
        }
    }
}

/// Number of employees currently on site.
pub fn active_count(roster: &[Employee]) -> usize {
    roster
        .iter()
        .filter(|employee| employee.status == EmployeeStatus::Active)
        .count()
}

/// Sum of hours worked today across the roster.
pub fn total_hours(roster: &[Employee]) -> f32 {
    roster.iter().map(|employee| employee.hours_today).sum()
}
