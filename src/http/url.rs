//! URL building and query-string serialization.

use crate::error::{HttpError, HttpResult};
use crate::http::ClientConfig;
use crate::network::default_port_for;

use serde_json::{Map, Value};

/// Request parameters: a query string for GET/DELETE, a JSON body for POST/PUT.
pub type Parameters = Map<String, Value>;

impl ClientConfig {
    /// Expand the URL template for `path`.
    pub fn build_url(&self, path: &str) -> String {
        let endpoint = match default_port_for(&self.protocol) {
            Some(port) if port == self.http_port => self.endpoint.clone(),
            _ => format!("{}:{}", self.endpoint, self.http_port),
        };

        self.url
            .replace(":protocol", &self.protocol)
            .replace(":endpoint", &endpoint)
            .replace(":version", &self.api_version)
            .replace(":path", path.trim_start_matches('/'))
    }
}

/// Append `parameters` to `url` as a query string.
pub fn append_query(url: &str, parameters: &Parameters) -> HttpResult<String> {
    if parameters.is_empty() {
        return Ok(url.to_string());
    }

    let pairs: Vec<(&str, String)> = parameters
        .iter()
        .map(|(k, v)| (k.as_str(), query_value(v)))
        .collect();
    let query = serde_urlencoded::to_string(&pairs)
        .map_err(|e| HttpError::Config(format!("cannot encode parameters: {e}")))?;

    let separator = if !url.contains('?') {
        "?"
    } else if url.ends_with('?') || url.ends_with('&') {
        ""
    } else {
        "&"
    };
    Ok(format!("{url}{separator}{query}"))
}

fn query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Parameters {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_default_template() {
        let url = ClientConfig::default().build_url("Report.Queue");
        assert_eq!(
            url,
            "https://api.omniture.com/admin/1.4/rest/?method=Report.Queue"
        );
    }

    #[test]
    fn test_leading_slash_is_stripped() {
        let url = ClientConfig::default().build_url("/Company.GetReportSuites");
        assert!(url.ends_with("?method=Company.GetReportSuites"));
    }

    #[test]
    fn test_non_default_port_is_inlined() {
        let config = ClientConfig {
            http_port: 8443,
            ..ClientConfig::default()
        };
        assert_eq!(
            config.build_url("Report.Get"),
            "https://api.omniture.com:8443/admin/1.4/rest/?method=Report.Get"
        );

        let plain = ClientConfig {
            protocol: "http".to_string(),
            endpoint: "localhost".to_string(),
            http_port: 80,
            url: ":protocol://:endpoint/:path".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(plain.build_url("some/path"), "http://localhost/some/path");
    }

    #[test]
    fn test_append_query_separators() {
        let p = params(json!({"a": "b"}));
        assert_eq!(append_query("http://h/x", &p).unwrap(), "http://h/x?a=b");
        assert_eq!(
            append_query("http://h/?method=M", &p).unwrap(),
            "http://h/?method=M&a=b"
        );
        assert_eq!(append_query("http://h/?", &p).unwrap(), "http://h/?a=b");
        assert_eq!(
            append_query("http://h/x", &Parameters::new()).unwrap(),
            "http://h/x"
        );
    }

    #[test]
    fn test_append_query_value_rendering() {
        let p = params(json!({"flag": true, "n": 5, "none": null, "q": "a b&c", "list": [1, 2]}));
        let url = append_query("http://h/x", &p).unwrap();
        assert!(url.contains("flag=true"));
        assert!(url.contains("n=5"));
        assert!(url.contains("none=&") || url.ends_with("none="));
        assert!(url.contains("q=a+b%26c"));
        assert!(url.contains("list=%5B1%2C2%5D"));
    }
}
