//! Typed client configuration.

use crate::error::{HttpError, HttpResult};
use crate::network;
use crate::options::{is_truthy, Options};

use serde_json::Value;
use std::time::Duration;

/// Configuration of an [`HttpClient`](super::HttpClient).
///
/// Known options get a typed field; anything else lands in `extra` and is
/// passed through to the transport untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// URL scheme substituted for `:protocol`.
    pub protocol: String,
    /// API host substituted for `:endpoint`.
    pub endpoint: String,
    /// URL template.
    pub url: String,
    /// API version substituted for `:version`.
    pub api_version: String,
    pub http_port: u16,
    /// Forwarded to the transport; not enforced here.
    pub timeout: Duration,
    /// Follow HTTP redirects.
    pub follow_location: bool,
    pub user_agent: String,
    /// Response body format. Only `"json"` is decoded.
    pub format: String,
    pub extra: Options,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol: network::DEFAULT_PROTOCOL.to_string(),
            endpoint: network::DEFAULT_ENDPOINT.to_string(),
            url: network::DEFAULT_URL_TEMPLATE.to_string(),
            api_version: network::DEFAULT_API_VERSION.to_string(),
            http_port: network::DEFAULT_HTTP_PORT,
            timeout: Duration::from_secs(network::DEFAULT_TIMEOUT_SECS),
            follow_location: true,
            user_agent: network::DEFAULT_USER_AGENT.to_string(),
            format: network::DEFAULT_FORMAT.to_string(),
            extra: Options::new(),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `MARKETING_CLOUD_ENDPOINT`, `MARKETING_CLOUD_API_VERSION`
    /// and `MARKETING_CLOUD_TIMEOUT_SECS` when present.
    pub fn from_env() -> HttpResult<Self> {
        let mut config = Self::default();
        if let Ok(endpoint) = std::env::var("MARKETING_CLOUD_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(version) = std::env::var("MARKETING_CLOUD_API_VERSION") {
            config.api_version = version;
        }
        if let Ok(secs) = std::env::var("MARKETING_CLOUD_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                HttpError::Config(format!(
                    "MARKETING_CLOUD_TIMEOUT_SECS is not an integer: {secs}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Set an option by name.
    ///
    /// Known names are parsed into their typed field; unknown names go to `extra`.
    pub fn set(&mut self, name: &str, value: Value) -> HttpResult<()> {
        match name {
            "protocol" => self.protocol = expect_string(name, value)?,
            "endpoint" => self.endpoint = expect_string(name, value)?,
            "url" => self.url = expect_string(name, value)?,
            "version" => self.api_version = expect_string(name, value)?,
            "user_agent" => self.user_agent = expect_string(name, value)?,
            "format" => self.format = expect_string(name, value)?,
            "http_port" => {
                let port = value
                    .as_u64()
                    .and_then(|p| u16::try_from(p).ok())
                    .ok_or_else(|| {
                        HttpError::Config(format!("http_port must be a port number, got {value}"))
                    })?;
                self.http_port = port;
            }
            "timeout" => {
                let timeout = value
                    .as_f64()
                    .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                    .ok_or_else(|| {
                        HttpError::Config(format!(
                            "timeout must be a number of seconds, got {value}"
                        ))
                    })?;
                self.timeout = timeout;
            }
            "follow-location" => self.follow_location = is_truthy(&value),
            _ => {
                self.extra.set(name, value);
            }
        }
        Ok(())
    }

    /// Read an option by name, as a JSON value.
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            "protocol" => Some(Value::from(self.protocol.as_str())),
            "endpoint" => Some(Value::from(self.endpoint.as_str())),
            "url" => Some(Value::from(self.url.as_str())),
            "version" => Some(Value::from(self.api_version.as_str())),
            "user_agent" => Some(Value::from(self.user_agent.as_str())),
            "format" => Some(Value::from(self.format.as_str())),
            "http_port" => Some(Value::from(self.http_port)),
            "timeout" => Some(timeout_value(self.timeout)),
            "follow-location" => Some(Value::Bool(self.follow_location)),
            _ => self.extra.get(name).cloned(),
        }
    }

    /// A copy of this config with `overrides` applied on top.
    pub fn merged(&self, overrides: &Options) -> HttpResult<Self> {
        let mut config = self.clone();
        for (name, value) in overrides.iter() {
            config.set(name, value.clone())?;
        }
        Ok(config)
    }
}

fn expect_string(name: &str, value: Value) -> HttpResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(HttpError::Config(format!("{name} must be a string, got {other}"))),
    }
}

// Whole seconds read back as integers so `set("timeout", 33)` round-trips as `33`.
fn timeout_value(timeout: Duration) -> Value {
    if timeout.subsec_nanos() == 0 {
        Value::from(timeout.as_secs())
    } else {
        Value::from(timeout.as_secs_f64())
    }
}
