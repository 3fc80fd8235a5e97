//! Network defaults for the Marketing Cloud REST API.

/// Default API host.
pub const DEFAULT_ENDPOINT: &str = "api.omniture.com";

/// Default URL scheme.
pub const DEFAULT_PROTOCOL: &str = "https";

/// Default REST API version.
pub const DEFAULT_API_VERSION: &str = "1.4";

/// URL template. `:protocol`, `:endpoint`, `:version` and `:path` are substituted per request.
pub const DEFAULT_URL_TEMPLATE: &str = ":protocol://:endpoint/admin/:version/rest/?method=:path";

/// Default port for the default protocol.
pub const DEFAULT_HTTP_PORT: u16 = 443;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default response format.
pub const DEFAULT_FORMAT: &str = "json";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("marketing-cloud-rs/", env!("CARGO_PKG_VERSION"));

/// Port a protocol uses when none is given in the URL.
pub fn default_port_for(protocol: &str) -> Option<u16> {
    match protocol {
        "https" => Some(443),
        "http" => Some(80),
        _ => None,
    }
}
