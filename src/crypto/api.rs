use serde::Serialize;

use crate::core::{ApiClient, ApiError};
use crate::crypto::model::{CryptoAsset, MarketStats, PricePoint, Timeframe};

#[derive(Serialize)]
struct NewsletterPayload<'a> {
    email: &'a str,
}

pub(super) async fn fetch_top_assets(
    client: &ApiClient,
    limit: usize,
) -> Result<Vec<CryptoAsset>, ApiError> {
    client
        .get(&format!("/assets?limit={limit}"), None)
        .await?
        .into_json()
}

/// A JSON `null` body decodes to `None`.
pub(super) async fn fetch_asset(
    client: &ApiClient,
    asset_id: &str,
) -> Result<Option<CryptoAsset>, ApiError> {
    let path = format!("/assets/{}", urlencoding::encode(asset_id));
    client.get(&path, None).await?.into_json()
}

pub(super) async fn fetch_market_stats(client: &ApiClient) -> Result<MarketStats, ApiError> {
    client.get("/market/stats", None).await?.into_json()
}

pub(super) async fn fetch_history(
    client: &ApiClient,
    asset_id: &str,
    timeframe: Timeframe,
) -> Result<Vec<PricePoint>, ApiError> {
    let path = format!(
        "/assets/{}/history?timeframe={}",
        urlencoding::encode(asset_id),
        timeframe.as_str()
    );
    client.get(&path, None).await?.into_json()
}

/// Any 2xx counts as subscribed; the response body is ignored.
pub(super) async fn subscribe(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    client
        .post("/newsletter/subscribe", &NewsletterPayload { email }, None)
        .await
        .map(|_| ())
}
