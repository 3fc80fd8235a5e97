//! HTTP layer — `HttpClient`, its configuration, and the `Transport` seam.

pub mod client;
pub mod config;
pub mod response;
pub mod transport;
pub mod url;

pub use client::{HttpClient, HttpClientBuilder};
pub use config::ClientConfig;
pub use response::{Method, RawResponse};
pub use transport::Transport;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use url::Parameters;
