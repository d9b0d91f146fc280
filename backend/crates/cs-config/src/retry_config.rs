use crate::{ConfigError, ConfigErrorResult, Section};

use std::time::Duration;

use serde::Deserialize;

// Retry constraints
pub const MIN_MAX_ATTEMPTS: u32 = 1;
pub const MAX_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

pub const MIN_BASE_DELAY_MS: u64 = 10;
pub const MAX_BASE_DELAY_MS: u64 = 60000;
pub const DEFAULT_BASE_DELAY_MS: u64 = 2000;

/// Retry settings for profile reads performed at startup.
///
/// Backoff is linear: the wait before attempt `n + 1` is `base_delay_ms * n`.
/// Writes (binds) are never retried.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay unit in milliseconds
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_attempts < MIN_MAX_ATTEMPTS || self.max_attempts > MAX_MAX_ATTEMPTS {
            return Err(ConfigError::invalid(
                Section::Retry,
                format!(
                    "retry.max_attempts must be {}-{}, got {}",
                    MIN_MAX_ATTEMPTS, MAX_MAX_ATTEMPTS, self.max_attempts
                ),
            ));
        }

        if self.base_delay_ms < MIN_BASE_DELAY_MS || self.base_delay_ms > MAX_BASE_DELAY_MS {
            return Err(ConfigError::invalid(
                Section::Retry,
                format!(
                    "retry.base_delay_ms must be {}-{}, got {}",
                    MIN_BASE_DELAY_MS, MAX_BASE_DELAY_MS, self.base_delay_ms
                ),
            ));
        }

        Ok(())
    }

    /// Wait before the attempt following `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.base_delay_ms.saturating_mul(u64::from(attempt)))
    }
}
