use std::time::Duration;

use coinfront::crypto::MOCK_LATENCY;
use coinfront::{ApiClient, AppConfig, CryptoService, DataMode, Environment, Timeframe};

use crate::common::{harness, unreachable_url};

fn mock_harness() -> crate::common::Harness {
    // Any network access would fail against this address.
    harness(unreachable_url(), DataMode::Mock, None)
}

#[tokio::test(start_paused = true)]
async fn mock_answers_after_the_artificial_latency() {
    let client = ApiClient::builder().base_url(unreachable_url()).build().unwrap();
    let service = CryptoService::new(&client, DataMode::Mock);

    let started = tokio::time::Instant::now();
    let assets = service.top_assets(2).await;

    assert!(started.elapsed() >= MOCK_LATENCY);
    let ids: Vec<_> = assets.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["bitcoin", "ethereum"]);
}

#[tokio::test]
async fn every_mock_call_waits_once() {
    let h = mock_harness();

    assert_eq!(h.service.top_assets(10).await.len(), 3);
    assert!(h.service.subscribe_to_newsletter("user@example.com").await);

    assert_eq!(h.sleeper.delays(), vec![MOCK_LATENCY, MOCK_LATENCY]);
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn mock_latency_can_be_overridden() {
    let h = mock_harness();
    let service = h.service.clone().mock_latency(Duration::from_millis(5));

    service.market_stats().await.unwrap();
    assert_eq!(h.sleeper.delays(), vec![Duration::from_millis(5)]);
}

#[tokio::test]
async fn mock_asset_lookup() {
    let h = mock_harness();

    let sol = h.service.asset_details("solana").await.unwrap();
    assert_eq!(sol.symbol, "SOL");
    assert!((sol.price - 150.0).abs() < f64::EPSILON);

    assert!(h.service.asset_details("unknown-id").await.is_none());
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn mock_stats_cover_twelve_months() {
    let h = mock_harness();

    let stats = h.service.market_stats().await.unwrap();
    assert_eq!(stats.active_users, 45_378);
    assert_eq!(stats.growth_trends.len(), 12);
    assert_eq!(stats.growth_trends[0].name, "Jan");
    assert_eq!(stats.growth_trends[11].name, "Dec");
    assert!(
        stats
            .growth_trends
            .windows(2)
            .all(|w| w[0].value < w[1].value)
    );
}

#[tokio::test]
async fn mock_history_has_timeframe_shape() {
    let h = mock_harness();

    for timeframe in [Timeframe::Day, Timeframe::Week, Timeframe::Month, Timeframe::Year] {
        let before = chrono::Utc::now().timestamp_millis();
        let points = h.service.historical_prices("bitcoin", timeframe).await;

        assert_eq!(points.len(), timeframe.samples() as usize, "{timeframe}");

        let step = i64::try_from(timeframe.interval().as_millis()).unwrap();
        assert!(points.windows(2).all(|w| w[1].timestamp - w[0].timestamp == step));
        let last = points.last().unwrap().timestamp;
        assert!(last < before + 1_000 && last >= before - step - 1_000);

        assert!(
            points
                .iter()
                .all(|p| (45_000.0..=55_000.0).contains(&p.price)),
            "{timeframe}"
        );
    }
}

#[tokio::test]
async fn mock_history_for_unknown_asset_uses_default_base() {
    let h = mock_harness();

    let points = h.service.historical_prices("unknown-id", Timeframe::Week).await;
    assert_eq!(points.len(), 7);
    assert!(points.iter().all(|p| (900.0..=1_100.0).contains(&p.price)));
}

#[test]
fn data_mode_follows_environment() {
    let dev = AppConfig::default();
    assert_eq!(DataMode::from_config(&dev), DataMode::Mock);

    let prod = AppConfig {
        environment: Environment::Production,
        ..AppConfig::default()
    };
    assert_eq!(DataMode::from_config(&prod), DataMode::Live);

    let service = CryptoService::from_config(&prod).unwrap();
    assert_eq!(service.mode(), DataMode::Live);
    assert_eq!(service.client().base_url(), "https://api.example.com");
}
