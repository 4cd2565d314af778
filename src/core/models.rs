use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::core::client::RetryConfig;
use crate::core::error::ApiError;

/* ----- REQUEST ----- */

/// HTTP request methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call adjustments to a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Headers added to the request. A header with the same name as a default
    /// (`content-type`, `authorization`) replaces the default.
    pub headers: Vec<(String, String)>,
    /// Overrides the client's retry policy for this call.
    pub retry: Option<RetryConfig>,
    /// Overrides the client's timeout for this call.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }
}

/* ----- RESPONSE ----- */

/// A response body, decoded according to the response's `Content-Type`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// `application/json` payloads.
    Json(serde_json::Value),
    /// `text/*` payloads.
    Text(String),
    /// Anything else, kept as raw bytes.
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// The `message` string field of a JSON object body, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Json(v) => v.get("message").and_then(serde_json::Value::as_str),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b),
            _ => None,
        }
    }
}

/// The successful outcome of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// The parsed body.
    pub data: ResponseBody,
    /// The HTTP status code (always 2xx).
    pub status: u16,
    /// The canonical reason phrase for `status`.
    pub status_text: String,
    /// Response headers with lower-cased names; repeated headers are joined with `", "`.
    pub headers: BTreeMap<String, String>,
}

impl ApiResponse {
    /// Decodes the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the body does not match `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let decoded = match self.data {
            ResponseBody::Json(v) => serde_json::from_value(v),
            ResponseBody::Text(t) => serde_json::from_str(&t),
            ResponseBody::Binary(b) => serde_json::from_slice(&b),
        };
        decoded.map_err(|e| ApiError::transport(format!("unexpected response body: {e}")))
    }
}
