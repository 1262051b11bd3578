//! # booster-api
//!
//! HTTP API layer for Booster built on Axum.
//!
//! Provides the `/v1` REST endpoints, middleware (CORS, request logging,
//! instance headers), extractors, request and response DTOs, error mapping,
//! and the generated OpenAPI document.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
