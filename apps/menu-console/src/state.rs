//! Session wiring - builds the store and its backends for one session.

use std::sync::Arc;

use menu_core::DomainError;
use menu_core::ports::{DishRepository, RateLimiter};
use menu_core::service::{DishStore, MenuSession};
use menu_infra::{InMemoryDishRepository, SlidingWindowRateLimiter, load_seed};

use crate::config::AppConfig;

/// Start a session with fresh in-memory backends.
///
/// The rate limiter is created here and dropped with the session, so limits
/// never carry over from one session to the next.
pub async fn start_session(config: &AppConfig) -> Result<MenuSession, DomainError> {
    let repo: Arc<dyn DishRepository> = Arc::new(InMemoryDishRepository::new());
    let limiter: Arc<dyn RateLimiter> =
        Arc::new(SlidingWindowRateLimiter::new(config.rate_limit.clone()));
    let store = DishStore::new(repo, limiter);

    if config.seed_menu {
        let count = load_seed(&store, config.seed_delay).await?;
        tracing::info!(count, "Sample menu loaded");
    } else {
        tracing::info!("Starting with an empty menu");
    }

    tracing::info!(
        max_requests = config.rate_limit.max_requests,
        window_ms = config.rate_limit.window.as_millis() as u64,
        "Session started"
    );

    Ok(MenuSession::start(store))
}
