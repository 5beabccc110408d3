//! Client configuration

use std::env;
use std::time::Duration;

/// Environment variable overriding the vendor API base URL.
pub const BASE_URL_ENV: &str = "SKIP_API_BASE_URL";

/// Production skip-hire vendor API.
pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk/api";

/// Overall per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the skip API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the vendor API, without a trailing slash.
    pub base_url: String,

    /// Overall request timeout.
    pub timeout: Duration,

    /// Retry behavior for transient failures.
    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: REQUEST_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Builds a config from the environment, falling back to the
    /// production vendor API when [`BASE_URL_ENV`] is unset.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Self {
            base_url,
            ..Self::default()
        }
    }
}

/// Bounded exponential backoff for transient failures.
///
/// Validation and not-found failures are never retried regardless of this
/// policy.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum retry attempts after the initial call.
    pub max_retries: u32,

    /// Delay before the first retry; doubles each attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// The delay before retry number `attempt` (zero-based):
    /// `base_delay * 2^attempt`.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }
}
