use std::collections::BTreeMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap};

use crate::core::error::ApiError;
use crate::core::models::ResponseBody;

/// Read the response body and decode it according to its `Content-Type`.
///
/// JSON is decoded to a value (an empty JSON body becomes `null`), `text/*` is read as text,
/// anything else is kept as bytes.
pub(crate) async fn read_body(resp: reqwest::Response) -> Result<ResponseBody, ApiError> {
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.contains("application/json") {
        let bytes = resp.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ResponseBody::Json(serde_json::Value::Null));
        }
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::transport(format!("invalid JSON body: {e}")))?;
        return Ok(ResponseBody::Json(value));
    }

    if content_type.contains("text/") {
        return Ok(ResponseBody::Text(resp.text().await?));
    }

    Ok(ResponseBody::Binary(resp.bytes().await?.to_vec()))
}

/// Flatten response headers into a plain map.
pub(crate) fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        out.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    out
}
