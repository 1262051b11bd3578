//! Access token lifecycle.

pub mod cleanup;
pub mod manager;

pub use cleanup::TokenCleanup;
pub use manager::{IssuedToken, TokenManager};
