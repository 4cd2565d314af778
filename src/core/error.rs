use thiserror::Error;

use crate::core::models::ResponseBody;

/// Status reported for failures where no HTTP response was obtained.
pub const TRANSPORT_STATUS: u16 = 0;
/// Status reported when a request is aborted by the client-side timeout.
pub const TIMEOUT_STATUS: u16 = 408;

/// The unified failure shape for every request made through [`ApiClient`](crate::ApiClient).
///
/// All three kinds expose a numeric [`status`](ApiError::status) so callers can branch on it
/// alone: `0` for transport failures, `408` for timeouts, the HTTP status otherwise.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable response was obtained (DNS, refused connection, broken body, bad JSON).
    #[error("{message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },

    /// The request did not complete before the configured timeout and was aborted.
    #[error("Request timeout")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase for `status`.
        status_text: String,
        /// The server-provided `message` field, or a generic description.
        message: String,
        /// The parsed error body, kept for inspection.
        body: ResponseBody,
    },
}

impl ApiError {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// The numeric status of this error (`0`, `408`, or the HTTP status).
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Transport { .. } => TRANSPORT_STATUS,
            Self::Timeout => TIMEOUT_STATUS,
            Self::Status { status, .. } => *status,
        }
    }

    /// The status text of this error.
    #[must_use]
    pub fn status_text(&self) -> &str {
        match self {
            Self::Transport { .. } => "Network Error",
            Self::Timeout => "Request Timeout",
            Self::Status { status_text, .. } => status_text,
        }
    }

    /// The parsed error body, if the server sent one.
    #[must_use]
    pub const fn body(&self) -> Option<&ResponseBody> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the server rejected the request as unauthenticated.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status() == 401
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::transport(e.to_string())
        }
    }
}

/// Errors raised while resolving configuration or constructing a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The underlying HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
