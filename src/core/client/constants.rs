//! Centralized constants for default endpoint, UA and request policy.

use std::time::Duration;

/// Identifies this client to the API.
pub(crate) const USER_AGENT: &str = concat!("coinfront/", env!("CARGO_PKG_VERSION"));

/// Placeholder API host used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";

/// Upper bound on a single request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Retries after the first attempt for retryable failures.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Pause before each retry.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1_000);
