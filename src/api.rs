//! `Api` — convenience layer for resource clients.
//!
//! Resource clients (report suites, segments, ...) wrap an `Api` and call its
//! verb methods. `Api` adds its own option bag and the response-unwrapping
//! policy; everything else goes straight to the shared [`HttpClient`].

use crate::error::{HttpError, HttpResult};
use crate::http::{HttpClient, Parameters, RawResponse};
use crate::options::Options;
use crate::unwrap::unwrap_response;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Option name that disables response unwrapping.
pub const RAW_OPTION: &str = "raw";

/// Base for resource clients.
#[derive(Debug, Clone)]
pub struct Api {
    client: Arc<HttpClient>,
    options: Options,
}

impl Api {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self::with_options(client, Options::new())
    }

    pub fn with_options(client: Arc<HttpClient>, options: Options) -> Self {
        Self { client, options }
    }

    /// The shared client backing this `Api`.
    pub fn client(&self) -> &Arc<HttpClient> {
        &self.client
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    /// Call any path with GET, e.g.
    /// `api.get("Company.GetReportSuites", &params, &Options::new())`.
    pub fn get(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.client.get(path, parameters, request_options)
    }

    /// Call any path with POST, e.g. `api.post("Report.Queue", &report_description, &opts)`.
    pub fn post(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.client.post(path, parameters, request_options)
    }

    pub fn put(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.client.put(path, parameters, request_options)
    }

    pub fn delete(
        &self,
        path: &str,
        parameters: &Parameters,
        request_options: &Options,
    ) -> HttpResult<Value> {
        self.client.delete(path, parameters, request_options)
    }

    // ── Options ──────────────────────────────────────────────────────────

    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.options.set(name, value);
        self
    }

    /// Read an option, falling back to `default` when it is unset or `null`.
    pub fn get_option(&self, name: &str, default: Value) -> Value {
        self.options.get_or(name, default)
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    // ── Responses ────────────────────────────────────────────────────────

    /// Return `response[key]` when present, or the full response when `key`
    /// is `None`, missing, `null`, or the `raw` option is truthy.
    pub fn return_response(&self, response: Value, key: Option<&str>) -> Value {
        unwrap_response(response, key, self.options.is_truthy(RAW_OPTION)).into_inner()
    }

    /// [`return_response`](Self::return_response), then deserialize into `T`.
    pub fn return_typed<T: DeserializeOwned>(
        &self,
        response: Value,
        key: Option<&str>,
    ) -> HttpResult<T> {
        serde_json::from_value(self.return_response(response, key))
            .map_err(|e| HttpError::Decode(format!("unexpected response shape: {e}")))
    }

    /// The most recent raw response seen by the backing client.
    pub fn last_response(&self) -> Option<RawResponse> {
        self.client.last_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, Method, Transport};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug)]
    struct NoopTransport;

    impl Transport for NoopTransport {
        fn do_request(
            &self,
            _: &str,
            _: &Parameters,
            _: Method,
            _: &ClientConfig,
        ) -> HttpResult<RawResponse> {
            Ok(RawResponse::new(200, ""))
        }
    }

    fn api() -> Api {
        Api::new(Arc::new(HttpClient::new(NoopTransport)))
    }

    fn sample() -> Value {
        json!({"data": 1, "meta": 2})
    }

    #[test]
    fn test_return_response_unwraps_key() {
        assert_eq!(api().return_response(sample(), Some("data")), json!(1));
    }

    #[test]
    fn test_return_response_raw_option() {
        let mut api = api();
        api.set_option("raw", true);
        assert_eq!(api.return_response(sample(), Some("data")), sample());
    }

    #[test]
    fn test_return_response_falsy_raw_still_unwraps() {
        let api = Api::with_options(
            Arc::new(HttpClient::new(NoopTransport)),
            Options::new().with("raw", 0),
        );
        assert_eq!(api.return_response(sample(), Some("data")), json!(1));
    }

    #[test]
    fn test_return_response_missing_key() {
        assert_eq!(api().return_response(sample(), Some("missing")), sample());
        assert_eq!(api().return_response(sample(), None), sample());
    }

    #[test]
    fn test_options_are_independent_from_client() {
        let client = Arc::new(HttpClient::new(NoopTransport));
        let mut api = Api::new(client.clone());
        api.set_option("timeout", 99);

        assert_eq!(api.get_option("timeout", Value::Null), json!(99));
        assert_eq!(client.get_option("timeout", Value::Null), json!(10));
        assert_eq!(api.get_option("unset", json!("dflt")), json!("dflt"));
    }

    #[test]
    fn test_get_option_null_reads_as_default() {
        let mut api = api();
        api.set_option("segment", Value::Null);
        assert_eq!(api.get_option("segment", json!("all")), json!("all"));
        assert_eq!(api.option("segment"), Some(&Value::Null));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct ReportSuite {
        rsid: String,
        site_title: String,
    }

    #[test]
    fn test_return_typed() {
        let response = json!({"report_suites": [{"rsid": "rs1", "site_title": "Main"}]});
        let suites: Vec<ReportSuite> = api().return_typed(response, Some("report_suites")).unwrap();
        assert_eq!(
            suites,
            vec![ReportSuite {
                rsid: "rs1".to_string(),
                site_title: "Main".to_string()
            }]
        );
    }

    #[test]
    fn test_return_typed_shape_mismatch() {
        let err = api()
            .return_typed::<Vec<ReportSuite>>(json!({"report_suites": 5}), Some("report_suites"))
            .unwrap_err();
        assert!(matches!(err, HttpError::Decode(_)));
    }
}
