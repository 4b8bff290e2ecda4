//! Bridge between the egui thread and the backend worker.

pub mod commands;
pub mod runtime;

pub use commands::BackendCommand;
