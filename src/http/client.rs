//! Generic HTTP client — `HttpClient`.
//!
//! Owns the configuration, hands each request to a [`Transport`], keeps the
//! last raw response for debugging, and decodes bodies in one place.

use crate::error::HttpResult;
use crate::http::response::{decode_body, Method, RawResponse};
use crate::http::transport::Transport;
use crate::http::url::Parameters;
use crate::http::ClientConfig;
use crate::options::Options;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::time::Duration;

/// Low-level client for the Marketing Cloud REST API.
///
/// Meant to be shared behind an `Arc` by several [`Api`](crate::api::Api)
/// values. Options and the last-response slot use interior locking;
/// concurrent writers are last-writer-wins.
#[derive(Debug)]
pub struct HttpClient {
    transport: Box<dyn Transport>,
    config: RwLock<ClientConfig>,
    last_response: Mutex<Option<RawResponse>>,
}

impl HttpClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: impl Transport + 'static, config: ClientConfig) -> Self {
        Self {
            transport: Box::new(transport),
            config: RwLock::new(config),
            last_response: Mutex::new(None),
        }
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub fn get(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.request(path, parameters, Method::Get, request_options)
    }

    pub fn post(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.request(path, parameters, Method::Post, request_options)
    }

    pub fn put(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.request(path, parameters, Method::Put, request_options)
    }

    pub fn delete(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.request(path, parameters, Method::Delete, request_options)
    }

    /// Perform one request and return the decoded body.
    ///
    /// `request_options` are applied over the client options for this call only.
    pub fn request(
        &self,
        path: &str,
        parameters: &Parameters,
        method: Method,
        request_options: &Options,
    ) -> HttpResult<Value> {
        let config = self.config.read().merged(request_options)?;
        let url = config.build_url(path);

        tracing::debug!(method = %method, url = %url, "Sending request");

        let raw = match self.transport.do_request(&url, parameters, method, &config) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(method = %method, url = %url, error = %e, "Request failed");
                return Err(e);
            }
        };

        tracing::debug!(status = raw.status, bytes = raw.body.len(), "Received response");
        if !raw.is_success() {
            tracing::warn!(status = raw.status, url = %url, "Non-success status");
        }

        *self.last_response.lock() = Some(raw.clone());

        decode_body(&raw, &config.format)
    }

    /// Decode a raw response using the client's configured format.
    pub fn decode_response(&self, raw: &RawResponse) -> HttpResult<Value> {
        let format = self.config.read().format.clone();
        decode_body(raw, &format)
    }

    // ── Options ──────────────────────────────────────────────────────────

    pub fn set_option(&self, name: &str, value: impl Into<Value>) -> HttpResult<&Self> {
        self.config.write().set(name, value.into())?;
        Ok(self)
    }

    /// Read an option, falling back to `default` when it is unset or `null`.
    pub fn get_option(&self, name: &str, default: Value) -> Value {
        self.option(name).filter(|v| !v.is_null()).unwrap_or(default)
    }

    pub fn option(&self, name: &str) -> Option<Value> {
        self.config.read().get(name)
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.config.read().clone()
    }

    /// The most recently received raw response, for debugging.
    pub fn last_response(&self) -> Option<RawResponse> {
        self.last_response.lock().clone()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    config: ClientConfig,
    transport: Option<Box<dyn Transport>>,
}

impl HttpClientBuilder {
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.config.endpoint = endpoint.to_string();
        self
    }

    pub fn protocol(mut self, protocol: &str) -> Self {
        self.config.protocol = protocol.to_string();
        self
    }

    pub fn url_template(mut self, template: &str) -> Self {
        self.config.url = template.to_string();
        self
    }

    pub fn api_version(mut self, version: &str) -> Self {
        self.config.api_version = version.to_string();
        self
    }

    pub fn http_port(mut self, port: u16) -> Self {
        self.config.http_port = port;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn follow_location(mut self, follow: bool) -> Self {
        self.config.follow_location = follow;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.config.user_agent = user_agent.to_string();
        self
    }

    /// Set any option by name, as `HttpClient::set_option` would.
    pub fn option(mut self, name: &str, value: impl Into<Value>) -> HttpResult<Self> {
        self.config.set(name, value.into())?;
        Ok(self)
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the client. Without an explicit transport, `ReqwestTransport` is used.
    pub fn build(self) -> HttpResult<HttpClient> {
        let transport = match self.transport {
            Some(t) => t,
            None => default_transport()?,
        };
        Ok(HttpClient {
            transport,
            config: RwLock::new(self.config),
            last_response: Mutex::new(None),
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> HttpResult<Box<dyn Transport>> {
    Ok(Box::new(crate::http::transport::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> HttpResult<Box<dyn Transport>> {
    Err(crate::error::HttpError::Config(
        "no transport configured and the `http` feature is disabled".to_string(),
    ))
}
