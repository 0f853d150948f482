//! # Menu Infrastructure
//!
//! Concrete implementations of the ports defined in `menu-core`.
//! Everything here is in-memory and lives as long as the owning session.

pub mod rate_limit;
pub mod repository;
pub mod seed;


pub use rate_limit::{RateLimitConfig, SlidingWindowRateLimiter};
pub use repository::InMemoryDishRepository;
pub use seed::{DEFAULT_SEED_DELAY, load_seed, mock_dishes};
