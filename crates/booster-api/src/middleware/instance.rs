//! Instance identification headers.
//!
//! Every response carries `X-Booster-Instance` (the host name) and
//! `X-Booster-Version` (`BOOSTER_VERSION`, or `na` when unset) so that
//! clients and load balancer logs can tell replicas apart.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

/// Header carrying the host name.
pub const INSTANCE_HEADER: HeaderName = HeaderName::from_static("x-booster-instance");
/// Header carrying the deployed version.
pub const VERSION_HEADER: HeaderName = HeaderName::from_static("x-booster-version");

/// Identity of the running server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceInfo {
    /// Host name of the machine or container.
    pub hostname: String,
    /// Deployed version string.
    pub version: String,
}

impl InstanceInfo {
    /// Creates instance info from explicit values.
    pub fn new(hostname: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            version: version.into(),
        }
    }

    /// Reads the host name from `HOSTNAME` (falling back to `/etc/hostname`)
    /// and the version from `BOOSTER_VERSION`.
    pub fn from_env() -> Self {
        let hostname = std::env::var("HOSTNAME")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .or_else(|| {
                std::fs::read_to_string("/etc/hostname")
                    .ok()
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
            })
            .unwrap_or_else(|| "unknown".to_string());

        let version = std::env::var("BOOSTER_VERSION")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "na".to_string());

        Self::new(hostname, version)
    }
}

/// Stamps the instance headers on every response.
pub async fn instance_headers(
    State(info): State<Arc<InstanceInfo>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if let Ok(value) = HeaderValue::from_str(&info.hostname) {
        headers.insert(INSTANCE_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&info.version) {
        headers.insert(VERSION_HEADER, value);
    }

    response
}
