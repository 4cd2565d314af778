//! Core components of the `coinfront` data layer.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The transport [`ApiClient`] and its builder.
//! - The unified [`ApiError`] type.
//! - Request/response models shared by the client and the domain service.
//! - The injectable capabilities (credentials, sleeping, notifications, navigation).

/// The transport client (`ApiClient`), builder, and retry configuration.
pub mod client;
/// Authentication token storage.
pub mod credentials;
/// The error types (`ApiError`, `ConfigError`) for the crate.
pub mod error;
/// Request and response models (`HttpMethod`, `ApiResponse`, `ResponseBody`).
pub mod models;
pub(crate) mod net;
/// Capability traits injected into the client and the service.
pub mod services;

// convenient re-exports so most code can just `use crate::core::ApiClient`
pub use client::{ApiClient, ApiClientBuilder, Backoff, RetryConfig};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore, NoCredentials};
pub use error::{ApiError, ConfigError};
pub use models::{ApiResponse, HttpMethod, RequestOptions, ResponseBody};
pub use services::{Navigator, Notifier, Sleeper, TokioSleeper, TracingNavigator, TracingNotifier};
