//! The request pipeline: URL + headers + body, one timed exchange, bounded retry loop.

use reqwest::header::HeaderMap;
use serde::Serialize;
use url::Url;

use crate::core::error::ApiError;
use crate::core::models::{ApiResponse, HttpMethod, RequestOptions};
use crate::core::net;

use super::{ApiClient, RetryConfig};

impl ApiClient {
    /// Performs a request against `base_url + path`, retrying according to the retry policy.
    ///
    /// A `body` that serializes to JSON `null` is not sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response was obtained, [`ApiError::Timeout`]
    /// when the exchange exceeded the timeout, and [`ApiError::Status`] for non-2xx responses
    /// (after retries are exhausted).
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: HttpMethod,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ApiError> {
        let options = options.unwrap_or_default();
        let url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::transport(format!("invalid URL for {path:?}: {e}")))?;
        let headers = self.request_headers(&options.headers)?;
        let body = encode_body(body)?;

        self.send_with_retry(method, &url, &headers, body.as_deref(), &options)
            .await
    }

    /// Performs a GET request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.request::<()>(path, HttpMethod::Get, None, options).await
    }

    /// Performs a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.request(path, HttpMethod::Post, Some(body), options).await
    }

    /// Performs a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.request(path, HttpMethod::Put, Some(body), options).await
    }

    /// Performs a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<ApiResponse, ApiError> {
        self.request::<()>(path, HttpMethod::Delete, None, options).await
    }

    async fn send_with_retry(
        &self,
        method: HttpMethod,
        url: &Url,
        headers: &HeaderMap,
        body: Option<&[u8]>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let retry: &RetryConfig = options.retry.as_ref().unwrap_or(&self.retry);
        let mut attempt: u32 = 0;

        loop {
            tracing::debug!(%method, %url, attempt, "sending request");
            match self.send_once(method, url, headers, body, options).await {
                Ok(resp) => return Ok(resp),
                Err(err) if retry.should_retry(&err, attempt) => {
                    let delay = retry.backoff.delay_for_attempt(attempt);
                    tracing::debug!(
                        %method,
                        %url,
                        status = err.status(),
                        attempt = attempt + 1,
                        max = retry.max_retries,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "retrying request"
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn send_once(
        &self,
        method: HttpMethod,
        url: &Url,
        headers: &HeaderMap,
        body: Option<&[u8]>,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let mut req = self
            .http
            .request(method.to_reqwest(), url.clone())
            .headers(headers.clone());
        if let Some(bytes) = body {
            req = req.body(bytes.to_vec());
        }

        let exchange = async {
            let resp = req.send().await?;
            let status = resp.status();
            let resp_headers = net::header_map(resp.headers());
            let data = net::read_body(resp).await?;
            Ok::<_, ApiError>((status, resp_headers, data))
        };

        let timeout = options.timeout.unwrap_or(self.timeout);
        let (status, headers, data) = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| ApiError::Timeout)??;

        let status_text = status.canonical_reason().unwrap_or_default().to_string();

        if !status.is_success() {
            let message = data
                .message()
                .filter(|m| !m.is_empty())
                .map_or_else(
                    || format!("Request failed with status {}", status.as_u16()),
                    str::to_string,
                );
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text,
                message,
                body: data,
            });
        }

        Ok(ApiResponse {
            data,
            status: status.as_u16(),
            status_text,
            headers,
        })
    }
}

fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<Vec<u8>>, ApiError> {
    let Some(body) = body else {
        return Ok(None);
    };
    let bytes = serde_json::to_vec(body)
        .map_err(|e| ApiError::transport(format!("failed to encode request body: {e}")))?;
    Ok((bytes.as_slice() != b"null").then_some(bytes))
}
