//! Default request headers, including the bearer token.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::core::error::ApiError;

impl super::ApiClient {
    /// Default headers, then caller overrides on top (same name replaces).
    pub(crate) fn request_headers(
        &self,
        overrides: &[(String, String)],
    ) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Looked up per request: the store may have been cleared by a previous 401.
        if let Some(token) = self.credentials.token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::transport(format!("invalid token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in overrides {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::transport(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::transport(format!("invalid header value for {name}: {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}
