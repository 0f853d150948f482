//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Rate limiter trait - abstraction over rate limiting backends.
///
/// Every key has its own independent budget.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check if a request is allowed and record it when it is.
    /// Rejected attempts are not counted against the budget.
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError>;

    /// Boolean form of [`RateLimiter::check`]. Backend errors fail open.
    async fn check_limit(&self, key: &str) -> bool {
        match self.check(key).await {
            Ok(result) => result.allowed,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Rate limiter error, failing open");
                true
            }
        }
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_after: Duration,
}

/// Rate limit errors.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}
