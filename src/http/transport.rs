//! Transport seam and the default reqwest-backed implementation.

use crate::error::HttpResult;
use crate::http::response::{Method, RawResponse};
use crate::http::url::Parameters;
use crate::http::ClientConfig;

use std::fmt::Debug;
use std::sync::Arc;

/// Performs the actual network I/O for an [`HttpClient`](super::HttpClient).
///
/// `url` is fully built (template expanded) but carries no parameters yet;
/// serializing `parameters` into the query string or body is up to the
/// implementation. `config` is the effective configuration for this single
/// request, i.e. client options with the per-request overrides applied.
pub trait Transport: Send + Sync + Debug {
    fn do_request(
        &self,
        url: &str,
        parameters: &Parameters,
        method: Method,
        config: &ClientConfig,
    ) -> HttpResult<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn do_request(
        &self,
        url: &str,
        parameters: &Parameters,
        method: Method,
        config: &ClientConfig,
    ) -> HttpResult<RawResponse> {
        (**self).do_request(url, parameters, method, config)
    }
}

#[cfg(feature = "http")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use super::Transport;
    use crate::error::HttpResult;
    use crate::http::response::{Method, RawResponse};
    use crate::http::url::{append_query, Parameters};
    use crate::http::ClientConfig;

    use reqwest::blocking::Client;
    use reqwest::header::{ACCEPT, USER_AGENT};
    use reqwest::redirect::Policy;

    /// Blocking transport over `reqwest`.
    ///
    /// Redirect policy is fixed per `reqwest` client, so two clients are kept
    /// and picked per request from `follow_location`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        following: Client,
        non_following: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> HttpResult<Self> {
            Ok(Self {
                following: Client::builder().pool_max_idle_per_host(10).build()?,
                non_following: Client::builder()
                    .pool_max_idle_per_host(10)
                    .redirect(Policy::none())
                    .build()?,
            })
        }

        fn client_for(&self, config: &ClientConfig) -> &Client {
            if config.follow_location {
                &self.following
            } else {
                &self.non_following
            }
        }
    }

    impl Transport for ReqwestTransport {
        fn do_request(
            &self,
            url: &str,
            parameters: &Parameters,
            method: Method,
            config: &ClientConfig,
        ) -> HttpResult<RawResponse> {
            let http_method = match method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut req = if method.uses_query() {
                let url = append_query(url, parameters)?;
                self.client_for(config).request(http_method, url)
            } else {
                self.client_for(config)
                    .request(http_method, url)
                    .json(parameters)
            };

            req = req
                .timeout(config.timeout)
                .header(USER_AGENT, config.user_agent.as_str())
                .header(ACCEPT, "application/json");

            let resp = req.send()?;
            let status = resp.status().as_u16();
            let headers = resp
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let body = resp.text()?;

            Ok(RawResponse {
                status,
                headers,
                body,
            })
        }
    }
}
