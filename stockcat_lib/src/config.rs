//! Runtime configuration read from environment variables.
//!
//! The CLI loads a `.env` file first, so every setting can live there.

use std::time::Duration;

use rand::Rng;

pub const ENV_TOKEN: &str = "FINMIND_TOKEN";
pub const ENV_API_URL: &str = "FINMIND_API_URL";
pub const ENV_CACHE_TTL: &str = "STOCKCAT_CACHE_TTL_SECS";
pub const ENV_RETRY_MAX: &str = "STOCKCAT_RETRY_MAX";
pub const ENV_RETRY_BASE_MS: &str = "STOCKCAT_RETRY_BASE_MS";
pub const ENV_RETRY_MAX_MS: &str = "STOCKCAT_RETRY_MAX_MS";

/// Settings for the cached client.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root override; `None` uses the production FinMind URL.
    pub api_url: Option<String>,
    /// FinMind API token; `None` sends anonymous requests.
    pub token: Option<String>,
    pub cache_ttl: Duration,
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            token: None,
            cache_ttl: Duration::from_secs(300),
            retry: RetryConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env_string(ENV_API_URL),
            token: env_string(ENV_TOKEN),
            cache_ttl: Duration::from_secs(env_u64(ENV_CACHE_TTL, 300)),
            retry: RetryConfig::from_env(),
        }
    }
}

/// Exponential backoff for retryable request failures.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 8000,
        }
    }
}

impl RetryConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_retries: env_usize(ENV_RETRY_MAX, defaults.max_retries),
            base_delay_ms: env_u64(ENV_RETRY_BASE_MS, defaults.base_delay_ms),
            max_delay_ms: env_u64(ENV_RETRY_MAX_MS, defaults.max_delay_ms),
        }
    }

    /// No retries at all.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (1-based), doubled per attempt,
    /// capped at `max_delay_ms`, with +/-20% jitter.
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
}
