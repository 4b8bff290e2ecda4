//! Backend commands queued from UI to backend worker.

use shared::domain::{EmployeeId, EventType};

pub enum BackendCommand {
    Connect {
        endpoint_url: String,
    },
    RefreshRoster,
    RecordEvent {
        employee_id: EmployeeId,
        event_type: EventType,
    },
    FetchMovements {
        employee_id: EmployeeId,
    },
}
