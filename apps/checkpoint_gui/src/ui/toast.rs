//! Toast notifications: every user-action failure and every recorded event
//! terminates in one of these.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub severity: ToastSeverity,
    pub message: String,
    pub created_tick: u64,
}

/// Frame ticks before a toast auto-dismisses. The app repaints at least
/// every 100ms, so this is on the order of a few seconds.
pub const TOAST_TTL_TICKS: u64 = 60;

impl Toast {
    pub fn new(severity: ToastSeverity, message: impl Into<String>, created_tick: u64) -> Self {
        Self {
            severity,
            message: message.into(),
            created_tick,
        }
    }

    pub fn expired(&self, tick: u64) -> bool {
        tick.saturating_sub(self.created_tick) > TOAST_TTL_TICKS
    }
}
