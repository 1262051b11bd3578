//! Issues, authenticates and revokes bearer access tokens.
//!
//! A token is a signed JWT whose `jti` names a row in `access_tokens`.
//! Deleting that row revokes the token before it expires.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use booster_core::config::AuthConfig;
use booster_core::error::AppError;
use booster_database::repositories::AccessTokenRepository;

use crate::jwt::{Claims, JwtDecoder, JwtEncoder};

/// A freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded token to hand to the client.
    pub token: String,
    /// Token ID.
    pub token_id: Uuid,
    /// Expiry instant.
    pub expires_at: DateTime<Utc>,
}

/// Manages access tokens backed by the `access_tokens` table.
#[derive(Debug, Clone)]
pub struct TokenManager {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    tokens: Arc<AccessTokenRepository>,
}

impl TokenManager {
    /// Creates a token manager from auth configuration.
    pub fn new(config: &AuthConfig, tokens: Arc<AccessTokenRepository>) -> Self {
        Self {
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
            tokens,
        }
    }

    /// Issues a new token for the user and records it.
    pub async fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AppError> {
        let token_id = Uuid::new_v4();
        let (token, expires_at) = self.encoder.encode_access_token(user_id, token_id)?;
        self.tokens.create(token_id, user_id, expires_at).await?;

        info!(user_id = %user_id, token_id = %token_id, "Access token issued");

        Ok(IssuedToken {
            token,
            token_id,
            expires_at,
        })
    }

    /// Validates a presented bearer token.
    ///
    /// The signature and expiry must check out and the token must not have
    /// been revoked.
    pub async fn authenticate(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decoder.decode_access_token(token)?;

        let record = self
            .tokens
            .find_active(claims.token_id())
            .await?
            .ok_or_else(|| AppError::authentication("Token has been revoked"))?;

        if record.user_id != claims.user_id() {
            return Err(AppError::authentication("Invalid token"));
        }

        Ok(claims)
    }

    /// Revokes one token.
    pub async fn revoke(&self, token_id: Uuid) -> Result<(), AppError> {
        let removed = self.tokens.delete(token_id).await?;
        debug!(token_id = %token_id, removed, "Access token revoked");
        Ok(())
    }
}
