//! Capabilities injected into the client and the domain service.
//!
//! Each trait has a production implementation here; tests substitute their own.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// An async delay, used between retries and for the mock-mode latency.
pub trait Sleeper: Send + Sync {
    /// Returns a future that completes after `dur`.
    fn sleep<'a>(&'a self, dur: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep<'a>(&'a self, dur: Duration) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(tokio::time::sleep(dur))
    }
}

/// A sink for user-visible notifications (the "toast" of a UI).
pub trait Notifier: Send + Sync {
    /// Shows an error message to the user.
    fn notify_error(&self, message: &str);
}

/// Emits notifications as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::warn!(target: "coinfront::notify", "{message}");
    }
}

/// Moves the user to another entry point, e.g. the login page after a 401.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Records the navigation request as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(target: "coinfront::navigate", path, "redirect requested");
    }
}
