use std::time::Duration;

use crate::core::error::ApiError;

use super::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY};

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug, PartialEq)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// The pause before retry number `attempt` (0-indexed).
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match *self {
            Self::Fixed(d) => d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let capped = (base.as_secs_f64() * factor.powi(exp)).min(max.as_secs_f64());
                let secs = if jitter {
                    capped * (0.5 + rand::random::<f64>())
                } else {
                    capped
                };
                Duration::from_secs_f64(secs.max(0.0))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
///
/// The default retries a server failure (status 500-599) twice with a fixed one second pause.
/// Timeouts and transport failures are surfaced immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on transport failures (no response received).
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: Backoff::Fixed(DEFAULT_RETRY_DELAY),
            retry_on_status: (500..600).collect(),
            retry_on_timeout: false,
            retry_on_connect: false,
        }
    }
}

impl RetryConfig {
    /// A policy that never retries.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Whether `err`, raised by attempt number `attempt` (0-indexed), should be retried.
    #[must_use]
    pub fn should_retry(&self, err: &ApiError, attempt: u32) -> bool {
        if !self.enabled || attempt >= self.max_retries {
            return false;
        }
        match err {
            ApiError::Status { status, .. } => self.retry_on_status.contains(status),
            ApiError::Timeout => self.retry_on_timeout,
            ApiError::Transport { .. } => self.retry_on_connect,
        }
    }
}
