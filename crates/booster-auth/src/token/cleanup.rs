//! Periodic removal of expired access tokens.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::{error, info};

use booster_core::error::AppError;
use booster_database::repositories::AccessTokenRepository;

/// Deletes expired `access_tokens` rows on a fixed interval.
#[derive(Debug, Clone)]
pub struct TokenCleanup {
    tokens: Arc<AccessTokenRepository>,
    interval: Duration,
}

impl TokenCleanup {
    /// Creates a cleanup task running every `interval_minutes` (at least one).
    pub fn new(tokens: Arc<AccessTokenRepository>, interval_minutes: u64) -> Self {
        Self {
            tokens,
            interval: Duration::from_secs(interval_minutes.max(1) * 60),
        }
    }

    /// Runs a single cleanup cycle and returns the number of tokens removed.
    pub async fn run_cleanup(&self) -> Result<u64, AppError> {
        let removed = self.tokens.delete_expired().await?;
        if removed > 0 {
            info!(removed, "Expired access tokens removed");
        }
        Ok(removed)
    }

    /// Loops until `cancel` flips to `true` or its sender is dropped.
    pub async fn run(self, mut cancel: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Token cleanup task started"
        );

        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                res = cancel.changed() => {
                    if res.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.run_cleanup().await {
                        error!(error = %e, "Token cleanup failed");
                    }
                }
            }
        }

        info!("Token cleanup task stopped");
    }
}
