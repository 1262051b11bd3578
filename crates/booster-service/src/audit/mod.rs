//! Audit log recording and retrieval.

pub mod service;

pub use service::{AuditService, snapshot};
