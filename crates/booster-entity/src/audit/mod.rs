//! Audit log entities.

pub mod action;
pub mod model;

pub use action::{LogAction, RefType};
pub use model::{CreateLogEntry, LogEntry};
