//! coinfront: the data layer behind a crypto platform's landing page.
//!
//! Two pieces do the work:
//! - [`ApiClient`], an HTTP transport with a bounded timeout, a fixed retry budget for
//!   server failures, content-type aware body parsing, and one error type ([`ApiError`])
//!   whose `status()` tells transport failures (`0`), timeouts (`408`) and server
//!   failures (the HTTP status) apart.
//! - [`CryptoService`], typed accessors for assets, market stats, price history and the
//!   newsletter, which never fail: errors become neutral values plus a user notification.
//!   In development mode it answers from local data without touching the network.
//!
//! [`AppConfig`] resolves the environment once at startup; [`format`] holds the number
//! formatting used by the stats dashboard.
//!
//! # Quickstart
//!
//! ```no_run
//! # use coinfront::{AppConfig, CryptoService};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let service = CryptoService::from_config(&config)?;
//!
//! let stats = service.market_stats_or_fallback().await;
//! println!("TVL: {}", coinfront::format::format_currency(stats.total_value_locked));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod crypto;
pub mod format;

pub use config::{AppConfig, Environment, Feature, FeatureFlags};
pub use crate::core::{
    ApiClient, ApiClientBuilder, ApiError, ApiResponse, Backoff, ConfigError, CredentialStore,
    FileCredentialStore, HttpMethod, MemoryCredentialStore, Navigator, NoCredentials, Notifier,
    RequestOptions, ResponseBody, RetryConfig, Sleeper, TokioSleeper, TracingNavigator,
    TracingNotifier,
};
pub use crypto::{
    CryptoAsset, CryptoService, DataMode, GrowthPoint, MarketStats, PricePoint, Timeframe,
};

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Intended for demos and ad-hoc debugging; libraries embedding this crate should set up
/// their own subscriber.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call is a no-op.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
