use std::sync::Arc;
use std::time::Duration;

use coinfront::{
    ApiClient, AppConfig, Backoff, CryptoService, DataMode, FileCredentialStore, RequestOptions,
    RetryConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    coinfront::init_tracing();

    // 1. Resolve configuration once (COINFRONT_API_BASE_URL, COINFRONT_ENV, ...).
    let config = AppConfig::from_env()?;
    println!("environment: {}, api: {}", config.environment, config.api_base_url);

    // 2. A client with a shorter timeout, a slower retry, and a token file.
    let retry = RetryConfig {
        max_retries: 3,
        backoff: Backoff::Fixed(Duration::from_millis(500)),
        ..Default::default()
    };
    let client = ApiClient::builder()
        .base_url(config.api_base_url.clone())
        .timeout(Duration::from_secs(5))
        .retry_config(retry)
        .credentials(Arc::new(FileCredentialStore::new(".coinfront/session.json")))
        .build()?;

    // 3. Raw transport access: every failure carries a status.
    let options = RequestOptions::default().header("x-request-source", "demo");
    match client.get("/market/stats", Some(options)).await {
        Ok(resp) => println!("{} {} -> {:?}", resp.status, resp.status_text, resp.data),
        Err(e) => println!("request failed ({} {}): {e}", e.status(), e.status_text()),
    }

    // 4. The typed service over the same client, forced live.
    let service = CryptoService::new(&client, DataMode::Live);
    let assets = service.top_assets(5).await;
    if assets.is_empty() {
        println!("assets unavailable");
    } else {
        for a in assets {
            println!("{} ({}) ${:.2}", a.name, a.symbol, a.price);
        }
    }

    Ok(())
}
