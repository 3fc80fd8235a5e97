//! Shared test helpers: a `Transport` that records every call.

#![allow(dead_code)]

use std::collections::VecDeque;

use parking_lot::Mutex;

use marketing_cloud::prelude::*;

/// One call seen by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub parameters: Parameters,
    pub method: Method,
    pub config: ClientConfig,
}

/// Replays queued responses (or `200 {}` once the queue is empty) and records requests.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<HttpResult<RawResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: RawResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    pub fn push_error(&self, error: HttpError) {
        self.responses.lock().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

impl Transport for RecordingTransport {
    fn do_request(
        &self,
        url: &str,
        parameters: &Parameters,
        method: Method,
        config: &ClientConfig,
    ) -> HttpResult<RawResponse> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            parameters: parameters.clone(),
            method,
            config: config.clone(),
        });
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(200, "{}")))
    }
}

pub fn params(value: serde_json::Value) -> Parameters {
    value.as_object().cloned().unwrap_or_default()
}
