//! Public client surface + builder.
//! Internals are split into `auth` (default headers), `request` (send + retry loop),
//! `retry` (policy) and `constants` (UA + defaults).

mod auth;
mod constants;
mod request;
mod retry;

pub use constants::{DEFAULT_API_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT};
pub use retry::{Backoff, RetryConfig};

use std::sync::Arc;
use std::time::Duration;

use constants::USER_AGENT;
use reqwest::Client;
use url::Url;

use crate::config::AppConfig;
use crate::core::credentials::{CredentialStore, NoCredentials};
use crate::core::error::ConfigError;
use crate::core::services::{Sleeper, TokioSleeper};

/// HTTP transport with a bounded timeout, retry on server failures and a uniform error type.
///
/// Cloning is cheap; clones share the connection pool, the credential store and the sleeper.
///
/// # Example
///
/// ```no_run
/// # use coinfront::{ApiClient, ApiError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .base_url(url::Url::parse("https://api.example.com")?)
///     .build()?;
///
/// match client.get("/market/stats", None).await {
///     Ok(resp) => println!("{} -> {:?}", resp.status, resp.data),
///     Err(e) => println!("failed with status {}: {e}", e.status()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
    retry: RetryConfig,
    credentials: Arc<dyn CredentialStore>,
    sleeper: Arc<dyn Sleeper>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl ApiClient {
    /// Create a new builder.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Build a client pointed at the configured API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Self::builder().base_url(config.api_base_url.clone()).build()
    }

    /// The base URL every request path is appended to (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// The credential store consulted for the bearer token.
    #[must_use]
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn sleeper(&self) -> &dyn Sleeper {
        self.sleeper.as_ref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ApiClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
    credentials: Option<Arc<dyn CredentialStore>>,
    sleeper: Option<Arc<dyn Sleeper>>,
}

impl ApiClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base URL (default: `https://api.example.com`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Bound on a whole request/response exchange. Default: 10 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Turn retries on or off without touching the rest of the policy.
    #[must_use]
    pub fn retry_enabled(mut self, enabled: bool) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).enabled = enabled;
        self
    }

    /// Where the bearer token comes from. Default: no token.
    #[must_use]
    pub fn credentials(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(store);
        self
    }

    /// How retry (and mock-mode) delays are awaited. Default: the tokio timer.
    #[must_use]
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ConfigError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_API_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(ApiClient {
            http,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry: self.retry.unwrap_or_default(),
            credentials: self.credentials.unwrap_or_else(|| Arc::new(NoCredentials)),
            sleeper: self.sleeper.unwrap_or_else(|| Arc::new(TokioSleeper)),
        })
    }
}
