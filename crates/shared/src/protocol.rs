use serde::{Deserialize, Serialize};

use crate::domain::{CheckpointId, EmployeeId, EmployeeStatus, EventType, MovementId};

/// One element of the roster array returned by `GET <endpoint>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub full_name: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub phone: String,
}

/// Body of `POST <endpoint>` recording an entry/exit event at a fixed
/// physical checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEventRequest {
    pub employee_id: EmployeeId,
    pub event_type: EventType,
    pub checkpoint_id: CheckpointId,
}

/// Success body for a recorded event. Lateness is computed entirely by the
/// server and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfirmation {
    pub success: bool,
    pub event_id: MovementId,
    pub employee_name: String,
    pub event_datetime: String,
    #[serde(default)]
    pub is_late: Option<bool>,
}

/// What the movement log recorded for an attempt: the two real event types,
/// plus denials the server turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Entry,
    Exit,
    Denied,
}

/// One row of `GET <endpoint>?employee_id=N`, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRecord {
    pub id: MovementId,
    pub employee_id: EmployeeId,
    pub checkpoint_id: CheckpointId,
    pub event_type: MovementKind,
    pub event_datetime: String,
    pub full_name: String,
    #[serde(default)]
    pub checkpoint_name: Option<String>,
    #[serde(default)]
    pub deny_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeniedBody;

    #[test]
    fn roster_record_parses_observed_wire_shape() {
        let raw = r#"{"id":4,"full_name":"Elena Volkova","position":"Technician","status":"offline","phone":"+7 (999) 456-78-90"}"#;
        let record: EmployeeRecord = serde_json::from_str(raw).expect("roster record");
        assert_eq!(record.id, EmployeeId(4));
        assert_eq!(record.status, EmployeeStatus::Offline);
    }

    #[test]
    fn event_request_serializes_snake_case_tags() {
        let request = RecordEventRequest {
            employee_id: EmployeeId(2),
            event_type: EventType::Exit,
            checkpoint_id: CheckpointId(1),
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["event_type"], "exit");
        assert_eq!(json["employee_id"], 2);
        assert_eq!(json["checkpoint_id"], 1);
    }

    #[test]
    fn confirmation_tolerates_missing_lateness_flag() {
        let raw = r#"{"success":true,"event_id":17,"employee_name":"Ivan Petrov","event_datetime":"2026-08-23T08:02:11"}"#;
        let confirmation: EventConfirmation = serde_json::from_str(raw).expect("confirmation");
        assert_eq!(confirmation.is_late, None);
        assert_eq!(confirmation.employee_name, "Ivan Petrov");
    }

    #[test]
    fn denied_body_carries_server_reason() {
        let raw = r#"{"success":false,"reason":"Employee deactivated"}"#;
        let denied: DeniedBody = serde_json::from_str(raw).expect("denied body");
        assert!(!denied.success);
        assert_eq!(denied.reason, "Employee deactivated");
    }

    #[test]
    fn movement_row_parses_denied_entries() {
        let raw = r#"{"id":9,"employee_id":3,"checkpoint_id":1,"event_type":"denied","event_datetime":"2026-08-23 07:58:00","full_name":"Mikhail Kozlov","checkpoint_name":"Main gate","deny_reason":"Access revoked"}"#;
        let row: MovementRecord = serde_json::from_str(raw).expect("movement row");
        assert_eq!(row.event_type, MovementKind::Denied);
        assert_eq!(row.deny_reason.as_deref(), Some("Access revoked"));
    }
}
