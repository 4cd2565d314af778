mod api;
mod mock;
mod model;

pub use model::{CryptoAsset, GrowthPoint, MarketStats, PricePoint, Timeframe};

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::core::{
    ApiClient, ApiError, ConfigError, Navigator, Notifier, TracingNavigator, TracingNotifier,
};

/// Number of assets returned by [`CryptoService::top_assets`] when the caller has no preference.
pub const DEFAULT_ASSET_LIMIT: usize = 10;
/// Artificial latency of every development-mode answer.
pub const MOCK_LATENCY: Duration = Duration::from_millis(500);
/// Entry point the user is sent to when the server rejects the session.
pub const LOGIN_PATH: &str = "/login";

/// Where the service gets its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataMode {
    /// Call the remote API through the transport client.
    #[default]
    Live,
    /// Answer from local data after [`MOCK_LATENCY`]; the network is never touched.
    Mock,
}

impl DataMode {
    /// `Mock` in the development environment, `Live` otherwise.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        if config.is_development() {
            Self::Mock
        } else {
            Self::Live
        }
    }
}

/// Typed access to the platform's market data and newsletter endpoints.
///
/// No method returns an error. Failures are logged, shown to the user through the
/// [`Notifier`], and turned into a neutral value (empty list, `None`, `false`); callers
/// should read an empty result as "unavailable". A 401 also clears the stored token and
/// sends the user to [`LOGIN_PATH`] through the [`Navigator`].
///
/// # Example
///
/// ```no_run
/// # use coinfront::{ApiClient, CryptoService, DataMode, Timeframe};
/// # #[tokio::main]
/// # async fn main() {
/// let client = ApiClient::default();
/// let service = CryptoService::new(&client, DataMode::Mock);
///
/// let assets = service.top_assets(2).await;
/// assert_eq!(assets[0].id, "bitcoin");
///
/// let history = service.historical_prices("bitcoin", Timeframe::Week).await;
/// assert_eq!(history.len(), 7);
/// # }
/// ```
#[derive(Clone)]
pub struct CryptoService {
    client: ApiClient,
    mode: DataMode,
    mock_latency: Duration,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for CryptoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoService")
            .field("client", &self.client)
            .field("mode", &self.mode)
            .field("mock_latency", &self.mock_latency)
            .finish_non_exhaustive()
    }
}

impl CryptoService {
    /// Creates a service over `client` in the given mode.
    pub fn new(client: &ApiClient, mode: DataMode) -> Self {
        Self {
            client: client.clone(),
            mode,
            mock_latency: MOCK_LATENCY,
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(TracingNavigator),
        }
    }

    /// Creates a client and a service from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let client = ApiClient::from_config(config)?;
        Ok(Self::new(&client, DataMode::from_config(config)))
    }

    /// Sets where user-visible error messages go.
    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Sets how the login redirect is performed.
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Overrides the development-mode latency.
    #[must_use]
    pub const fn mock_latency(mut self, latency: Duration) -> Self {
        self.mock_latency = latency;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> DataMode {
        self.mode
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The top `limit` assets by rank. Empty when unavailable.
    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn top_assets(&self, limit: usize) -> Vec<CryptoAsset> {
        if self.mode == DataMode::Mock {
            let assets: Vec<CryptoAsset> = mock::assets().into_iter().take(limit).collect();
            return self.mock(assets).await;
        }

        let result = api::fetch_top_assets(&self.client, limit).await;
        self.settle(result, "Failed to fetch crypto assets", Vec::new())
    }

    /// A single asset. `None` both when it does not exist and when the fetch failed.
    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn asset_details(&self, asset_id: &str) -> Option<CryptoAsset> {
        if self.mode == DataMode::Mock {
            let asset = mock::assets().into_iter().find(|a| a.id == asset_id);
            return self.mock(asset).await;
        }

        let result = api::fetch_asset(&self.client, asset_id).await;
        let fallback = format!("Failed to fetch details for {asset_id}");
        self.settle(result, &fallback, None)
    }

    /// The aggregate market snapshot. `None` when unavailable.
    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn market_stats(&self) -> Option<MarketStats> {
        if self.mode == DataMode::Mock {
            return self.mock(Some(mock::market_stats())).await;
        }

        let result = api::fetch_market_stats(&self.client).await.map(Some);
        self.settle(result, "Failed to fetch market statistics", None)
    }

    /// The market snapshot, or [`MarketStats::fallback`] when it is unavailable.
    pub async fn market_stats_or_fallback(&self) -> MarketStats {
        self.market_stats()
            .await
            .unwrap_or_else(MarketStats::fallback)
    }

    /// Price samples over `timeframe`, oldest first. Empty when unavailable.
    #[tracing::instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn historical_prices(&self, asset_id: &str, timeframe: Timeframe) -> Vec<PricePoint> {
        if self.mode == DataMode::Mock {
            let now_ms = chrono::Utc::now().timestamp_millis();
            let points = mock::price_history(asset_id, timeframe, now_ms, &mut rand::thread_rng());
            return self.mock(points).await;
        }

        let result = api::fetch_history(&self.client, asset_id, timeframe).await;
        self.settle(result, "Failed to fetch historical price data", Vec::new())
    }

    /// Signs `email` up for the newsletter. The address is not validated here.
    #[tracing::instrument(skip(self, email), fields(mode = ?self.mode))]
    pub async fn subscribe_to_newsletter(&self, email: &str) -> bool {
        if self.mode == DataMode::Mock {
            tracing::info!(email, "newsletter subscription");
            return self.mock(true).await;
        }

        let result = api::subscribe(&self.client, email).await.map(|()| true);
        self.settle(result, "Failed to subscribe to newsletter", false)
    }

    async fn mock<T>(&self, value: T) -> T {
        self.client.sleeper().sleep(self.mock_latency).await;
        value
    }

    fn settle<T>(&self, result: Result<T, ApiError>, fallback: &str, neutral: T) -> T {
        result.unwrap_or_else(|err| {
            self.report(&err, fallback);
            neutral
        })
    }

    fn report(&self, err: &ApiError, fallback: &str) {
        tracing::error!(
            status = err.status(),
            status_text = err.status_text(),
            error = %err,
            "{fallback}"
        );

        let message = err.to_string();
        self.notifier
            .notify_error(if message.is_empty() { fallback } else { &message });

        if err.is_unauthorized() {
            self.client.credentials().clear();
            self.navigator.navigate(LOGIN_PATH);
        }
    }
}
