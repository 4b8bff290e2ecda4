//! UI layer for the checkpoint dashboard: app shell, panels, and toast
//! notifications.

pub mod app;
pub mod toast;

pub use app::{CheckpointApp, StartupConfig};
