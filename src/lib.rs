//! # Marketing Cloud client core
//!
//! A thin client for the Marketing Cloud REST API.
//!
//! ## Architecture
//!
//! 1. **HTTP** — `HttpClient`: typed options, URL templating, one blocking call
//!    through an injected `Transport`, central body decoding
//! 2. **Api** — `Api`: verb forwarding, its own option bag, response unwrapping
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marketing_cloud::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let client = Arc::new(HttpClient::builder().timeout(Duration::from_secs(30)).build()?);
//! let api = Api::new(client);
//!
//! let response = api.get("Company.GetReportSuites", &Parameters::new(), &Options::new())?;
//! let suites = api.return_response(response, Some("report_suites"));
//! ```

/// Unified error types.
pub mod error;

/// Network defaults.
pub mod network;

/// String-keyed option bag.
pub mod options;

/// `HttpClient`, configuration, transport seam.
pub mod http;

/// Response unwrapping policy.
pub mod unwrap;

/// `Api` convenience layer.
pub mod api;

pub mod prelude {
    pub use crate::api::{Api, RAW_OPTION};
    pub use crate::error::{HttpError, HttpResult};
    pub use crate::http::{
        ClientConfig, HttpClient, HttpClientBuilder, Method, Parameters, RawResponse, Transport,
    };
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::options::Options;
    pub use crate::unwrap::{unwrap_response, Unwrapped};
}
