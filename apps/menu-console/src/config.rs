//! Application configuration loaded from environment variables and flags.

use std::env;
use std::time::Duration;

use clap::Parser;
use menu_infra::{DEFAULT_SEED_DELAY, RateLimitConfig};

/// Command-line flags. Each one overrides its environment variable.
#[derive(Debug, Default, Parser)]
#[command(name = "menu-console", version, about = "Manage a restaurant menu from the terminal")]
pub struct Cli {
    /// Start with an empty menu instead of the sample dishes.
    #[arg(long)]
    pub empty: bool,

    /// Delay of the simulated menu fetch, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub seed_delay_ms: Option<u64>,

    /// Mutations of one kind allowed per window.
    #[arg(long, value_name = "N")]
    pub max_requests: Option<u32>,

    /// Rate limit window, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub window_ms: Option<u64>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rate_limit: RateLimitConfig,
    pub seed_menu: bool,
    pub seed_delay: Duration,
}

impl AppConfig {
    /// Sessions allow five mutations of each kind per minute.
    fn session_rate_limit() -> RateLimitConfig {
        RateLimitConfig {
            max_requests: 5,
            ..RateLimitConfig::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            rate_limit: RateLimitConfig::from_env_or(Self::session_rate_limit()),
            seed_menu: env::var("SEED_MENU")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            seed_delay: env::var("SEED_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_SEED_DELAY),
        }
    }

    /// Apply command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if cli.empty {
            self.seed_menu = false;
        }
        if let Some(ms) = cli.seed_delay_ms {
            self.seed_delay = Duration::from_millis(ms);
        }
        if let Some(max) = cli.max_requests {
            self.rate_limit.max_requests = max;
        }
        if let Some(ms) = cli.window_ms {
            self.rate_limit.window = Duration::from_millis(ms);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "menu-console",
            "--empty",
            "--seed-delay-ms",
            "0",
            "--max-requests",
            "2",
            "--window-ms",
            "1000",
        ]);
        let config = AppConfig {
            rate_limit: AppConfig::session_rate_limit(),
            seed_menu: true,
            seed_delay: DEFAULT_SEED_DELAY,
        }
        .with_cli(&cli);

        assert!(!config.seed_menu);
        assert_eq!(config.seed_delay, Duration::ZERO);
        assert_eq!(config.rate_limit.max_requests, 2);
        assert_eq!(config.rate_limit.window, Duration::from_millis(1000));
    }

    #[test]
    fn test_no_flags_keep_config() {
        let config = AppConfig {
            rate_limit: AppConfig::session_rate_limit(),
            seed_menu: true,
            seed_delay: DEFAULT_SEED_DELAY,
        }
        .with_cli(&Cli::default());

        assert!(config.seed_menu);
        assert_eq!(config.rate_limit.max_requests, 5);
        assert_eq!(config.rate_limit.window, Duration::from_secs(60));
    }
}
