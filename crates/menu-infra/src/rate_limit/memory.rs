//! In-memory sliding-window rate limiter.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use menu_core::ports::{RateLimitError, RateLimitResult, RateLimiter};

/// In-memory rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window, per key.
    pub max_requests: u32,
    /// Window duration.
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_millis(60_000),
        }
    }
}

impl RateLimitConfig {
    /// Read `RATE_LIMIT_MAX_REQUESTS` and `RATE_LIMIT_WINDOW_MS`, falling
    /// back to `defaults` for anything unset or unparsable.
    pub fn from_env_or(defaults: Self) -> Self {
        Self {
            max_requests: std::env::var("RATE_LIMIT_MAX_REQUESTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_requests),
            window: std::env::var("RATE_LIMIT_WINDOW_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.window),
        }
    }
}

/// Per-key sliding-window limiter.
///
/// Each key keeps the instants of its accepted requests. On every check the
/// entries that are `window` old or older are dropped first; the request is
/// accepted only if fewer than `max_requests` remain. Rejected requests are
/// not recorded. Windows live as long as the limiter does.
pub struct SlidingWindowRateLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
    config: RateLimitConfig,
}

impl SlidingWindowRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    fn reset_after(&self, window: &VecDeque<Instant>, now: Instant) -> Duration {
        window
            .front()
            .map(|oldest| self.config.window.saturating_sub(now.duration_since(*oldest)))
            .unwrap_or(self.config.window)
    }
}

impl Default for SlidingWindowRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

#[async_trait]
impl RateLimiter for SlidingWindowRateLimiter {
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        let window = windows.entry(key.to_string()).or_default();

        // Entries are pushed in time order, so expired ones sit at the front.
        while let Some(oldest) = window.front() {
            if now.duration_since(*oldest) < self.config.window {
                break;
            }
            window.pop_front();
        }

        let max = self.config.max_requests as usize;
        if window.len() >= max {
            tracing::debug!(key = %key, in_window = window.len(), "Request rejected");
            return Ok(RateLimitResult {
                allowed: false,
                remaining: 0,
                reset_after: self.reset_after(window, now),
            });
        }

        window.push_back(now);
        Ok(RateLimitResult {
            allowed: true,
            remaining: (max - window.len()) as u32,
            reset_after: self.reset_after(window, now),
        })
    }
}
