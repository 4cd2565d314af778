use coinfront::format::{format_currency, format_date, format_number};
use coinfront::{ApiClient, CryptoService, DataMode, Timeframe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    coinfront::init_tracing();

    // 1. A service in development mode never touches the network.
    let client = ApiClient::builder().build()?;
    let service = CryptoService::new(&client, DataMode::Mock);

    println!("--- Top assets ---");
    for asset in service.top_assets(3).await {
        println!(
            "{:<10} {:>4}  {:>10}  {:+.1}%",
            asset.name,
            asset.symbol,
            format_currency(asset.price),
            asset.change_24h
        );
    }
    println!();

    // 2. Dashboard figures.
    let stats = service.market_stats_or_fallback().await;
    println!("--- Market stats ---");
    println!("Total value locked: {}", format_currency(stats.total_value_locked));
    println!("Active users:       {}", format_number(stats.active_users as f64));
    println!("Average fee:        {}", format_currency(stats.average_fee));
    println!();

    // 3. A week of generated prices.
    println!("--- ETH, last week ---");
    for point in service.historical_prices("ethereum", Timeframe::Week).await {
        let when = point.datetime_utc().map(format_date).unwrap_or_default();
        println!("{when}  {:.2}", point.price);
    }
    println!();

    let ok = service.subscribe_to_newsletter("user@example.com").await;
    println!("Newsletter signup accepted: {ok}");

    Ok(())
}
