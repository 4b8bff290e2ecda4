//! UI/backend events and error modeling for the dashboard controller.

use shared::{
    domain::{EmployeeId, EventType},
    protocol::{EmployeeRecord, MovementRecord},
};

pub enum UiEvent {
    Connected {
        endpoint: String,
    },
    Info(String),
    RosterRefreshed(Vec<EmployeeRecord>),
    EventRecorded {
        event_type: EventType,
        employee_name: String,
        is_late: bool,
    },
    MovementsLoaded {
        employee_id: EmployeeId,
        movements: Vec<MovementRecord>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Denied,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Connect,
    RecordEvent,
    General,
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Denied => "Denied",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    /// Buckets a worker failure by its message text. Classification only
    /// affects toast wording; every category ends up user-visible the same
    /// way.
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("denied")
            || message_lower.contains("403")
            || message_lower.contains("forbidden")
            || message_lower.contains("revoked")
            || message_lower.contains("deactivated")
            || message_lower.contains("not found")
        {
            UiErrorCategory::Denied
        } else if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("dns")
            || message_lower.contains("unavailable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn denied(context: UiErrorContext, reason: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Denied,
            context,
            message: reason.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
