//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Bearer token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Reject passwords zxcvbn scores below three.
    #[serde(default)]
    pub require_strong_passwords: bool,
    /// Interval between expired-token sweeps, in minutes.
    #[serde(default = "default_cleanup_interval")]
    pub token_cleanup_interval_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            password_min_length: default_password_min(),
            require_strong_passwords: false,
            token_cleanup_interval_minutes: default_cleanup_interval(),
        }
    }
}

fn default_jwt_secret() -> String {
    "this_is_booster_development_jwt_secret".to_string()
}

fn default_token_ttl() -> u64 {
    720
}

fn default_password_min() -> usize {
    8
}

fn default_cleanup_interval() -> u64 {
    60
}
