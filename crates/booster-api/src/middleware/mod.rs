//! Axum middleware stack.

pub mod cors;
pub mod instance;
pub mod logging;
