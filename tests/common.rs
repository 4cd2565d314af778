#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use coinfront::{
    ApiClient, CredentialStore, CryptoService, DataMode, MemoryCredentialStore, Navigator,
    Notifier, Sleeper,
};
use httpmock::MockServer;
use url::Url;

/// Completes immediately and remembers every requested delay.
#[derive(Default)]
pub struct RecordingSleeper {
    pub delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep<'a>(&'a self, dur: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        self.delays.lock().unwrap().push(dur);
        Box::pin(async {})
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&server.base_url()).unwrap()
}

/// A base URL nothing listens on.
pub fn unreachable_url() -> Url {
    Url::parse("http://127.0.0.1:1").unwrap()
}

pub fn client_with(
    base: Url,
    credentials: Arc<dyn CredentialStore>,
) -> (ApiClient, Arc<RecordingSleeper>) {
    let sleeper = Arc::new(RecordingSleeper::default());
    let client = ApiClient::builder()
        .base_url(base)
        .credentials(credentials)
        .sleeper(sleeper.clone())
        .build()
        .unwrap();
    (client, sleeper)
}

pub fn client_for(server: &MockServer) -> (ApiClient, Arc<RecordingSleeper>) {
    client_with(base_url(server), Arc::new(MemoryCredentialStore::default()))
}

pub struct Harness {
    pub service: CryptoService,
    pub sleeper: Arc<RecordingSleeper>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub credentials: Arc<MemoryCredentialStore>,
}

pub fn harness(base: Url, mode: DataMode, token: Option<&str>) -> Harness {
    let credentials = Arc::new(MemoryCredentialStore::new(token.map(str::to_string)));
    let (client, sleeper) = client_with(base, credentials.clone());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let service = CryptoService::new(&client, mode)
        .notifier(notifier.clone())
        .navigator(navigator.clone());
    Harness {
        service,
        sleeper,
        notifier,
        navigator,
        credentials,
    }
}

pub fn live(server: &MockServer) -> Harness {
    harness(base_url(server), DataMode::Live, None)
}

pub fn bitcoin_json() -> serde_json::Value {
    serde_json::json!({
        "id": "bitcoin",
        "name": "Bitcoin",
        "symbol": "BTC",
        "price": 50000,
        "change24h": 2.5,
        "marketCap": 950000000000u64,
        "volume": 30000000000u64,
        "imageUrl": "https://example.com/btc.png"
    })
}

pub fn ethereum_json() -> serde_json::Value {
    serde_json::json!({
        "id": "ethereum",
        "name": "Ethereum",
        "symbol": "ETH",
        "price": 3000,
        "change24h": 1.8,
        "marketCap": 350000000000u64,
        "volume": 20000000000u64,
        "imageUrl": "https://example.com/eth.png"
    })
}

pub fn market_stats_json() -> serde_json::Value {
    serde_json::json!({
        "totalValueLocked": 1800000000u64,
        "activeUsers": 45378,
        "transactionVolume": 7245,
        "averageFee": 0.015,
        "growthTrends": [
            { "name": "Jan", "value": 4000, "users": 240, "transactions": 1200 },
            { "name": "Feb", "value": 5000, "users": 300, "transactions": 1600 }
        ]
    })
}
