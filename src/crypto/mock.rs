//! Local data served in development mode, plus the dashboard fallback snapshot.

use rand::Rng;

use super::model::{CryptoAsset, GrowthPoint, MarketStats, PricePoint, Timeframe};

/// Price used for generated history when the asset is not in the mock set.
pub(crate) const UNKNOWN_ASSET_BASE_PRICE: f64 = 1000.0;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &str,
    name: &str,
    symbol: &str,
    price: f64,
    change_24h: f64,
    market_cap: f64,
    volume: f64,
    image_url: &str,
) -> CryptoAsset {
    CryptoAsset {
        id: id.into(),
        name: name.into(),
        symbol: symbol.into(),
        price,
        change_24h,
        market_cap,
        volume,
        image_url: image_url.into(),
    }
}

/// The fixed mock asset set, ranked.
pub(crate) fn assets() -> Vec<CryptoAsset> {
    vec![
        asset(
            "bitcoin",
            "Bitcoin",
            "BTC",
            50_000.0,
            2.5,
            950_000_000_000.0,
            30_000_000_000.0,
            "https://cryptologos.cc/logos/bitcoin-btc-logo.png",
        ),
        asset(
            "ethereum",
            "Ethereum",
            "ETH",
            3_000.0,
            1.8,
            350_000_000_000.0,
            20_000_000_000.0,
            "https://cryptologos.cc/logos/ethereum-eth-logo.png",
        ),
        asset(
            "solana",
            "Solana",
            "SOL",
            150.0,
            7.2,
            65_000_000_000.0,
            5_000_000_000.0,
            "https://cryptologos.cc/logos/solana-sol-logo.png",
        ),
    ]
}

pub(crate) fn market_stats() -> MarketStats {
    const TRENDS: [(f64, u64, u64); 12] = [
        (4_000.0, 240, 1_200),
        (5_000.0, 300, 1_600),
        (6_000.0, 380, 2_100),
        (8_700.0, 490, 2_800),
        (9_800.0, 590, 3_200),
        (11_000.0, 690, 3_800),
        (12_000.0, 780, 4_300),
        (14_000.0, 880, 4_800),
        (17_000.0, 990, 5_400),
        (19_000.0, 1_100, 5_900),
        (21_000.0, 1_250, 6_500),
        (25_000.0, 1_500, 7_200),
    ];

    MarketStats {
        total_value_locked: 1_800_000_000.0,
        active_users: 45_378,
        transaction_volume: 7_245.0,
        average_fee: 0.015,
        growth_trends: MONTHS
            .iter()
            .zip(TRENDS)
            .map(|(name, (value, users, transactions))| GrowthPoint {
                name: (*name).to_string(),
                value,
                users,
                transactions,
            })
            .collect(),
    }
}

impl MarketStats {
    /// The static snapshot the stats dashboard shows when live stats are unavailable.
    ///
    /// Headline figures match the development data; the growth series is a straight
    /// line (`value = 4000 + 2000 i`, `users = 200 + 100 i`, `transactions = 1000 + 500 i`).
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            total_value_locked: 1_800_000_000.0,
            active_users: 45_378,
            transaction_volume: 7_245.0,
            average_fee: 0.015,
            growth_trends: MONTHS
                .iter()
                .zip(0u32..)
                .map(|(name, i)| GrowthPoint {
                    name: (*name).to_string(),
                    value: 4_000.0 + f64::from(i) * 2_000.0,
                    users: 200 + u64::from(i) * 100,
                    transactions: 1_000 + u64::from(i) * 500,
                })
                .collect(),
        }
    }
}

/// Synthetic history: each sample is `base * U(0.9, 1.1)`.
///
/// Samples are evenly spaced by the timeframe interval and end one interval before `now_ms`.
pub(crate) fn price_history<R: Rng + ?Sized>(
    asset_id: &str,
    timeframe: Timeframe,
    now_ms: i64,
    rng: &mut R,
) -> Vec<PricePoint> {
    let base = assets()
        .into_iter()
        .find(|a| a.id == asset_id)
        .map_or(UNKNOWN_ASSET_BASE_PRICE, |a| a.price);

    let n = i64::from(timeframe.samples());
    let interval_ms = i64::try_from(timeframe.interval().as_millis()).unwrap_or(i64::MAX);

    (0..n)
        .map(|i| PricePoint {
            timestamp: now_ms - (n - i) * interval_ms,
            price: base * rng.gen_range(0.9..1.1),
        })
        .collect()
}
