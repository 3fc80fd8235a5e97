//! HTTP methods, raw responses and body decoding.

use crate::error::{ErrorResponse, HttpError, HttpResult};

use serde_json::Value;
use std::fmt;

/// HTTP verb of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string rather than the body.
    pub fn uses_query(&self) -> bool {
        matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport-level response, before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup; first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decode `raw` according to `format`.
///
/// Non-2xx statuses become [`HttpError::Status`]. An empty (or whitespace-only)
/// body decodes to `Value::Null`.
pub fn decode_body(raw: &RawResponse, format: &str) -> HttpResult<Value> {
    if !raw.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(&raw.body)
            .ok()
            .and_then(|e| e.get_message())
            .unwrap_or_else(|| raw.body.trim().to_string());
        return Err(HttpError::Status {
            status: raw.status,
            message,
        });
    }

    if raw.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    match format {
        "json" => serde_json::from_str(&raw.body)
            .map_err(|e| HttpError::Decode(format!("invalid JSON body: {e}"))),
        other => Err(HttpError::Config(format!("unsupported response format: {other}"))),
    }
}
