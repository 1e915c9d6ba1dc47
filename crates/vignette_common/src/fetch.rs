//! Blocking JSON Fetcher
//!
//! Issues a single synchronous GET and parses the body as JSON.
//! The HTTP transport sits behind a trait so tests can substitute a
//! fake with canned responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;

/// Fetch errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Transport(String),

    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),
}

/// What the transport exposes: a status code and a body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Generic HTTP transport trait
pub trait HttpTransport: Send + Sync {
    /// Perform one blocking GET against the given address
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Real transport implementation over reqwest's blocking client
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Create a transport with the client defaults (no timeout, implicit
    /// redirect handling)
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| FetchError::Transport(format!("Failed to read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

/// Fetch a JSON document from `url`.
///
/// Returns `Ok(Some(doc))` for a 200 response with a valid JSON body and
/// `Ok(None)` for any other status code. A 200 response with a malformed
/// body is an error, not an absence; transport failures propagate as-is.
pub fn fetch(transport: &dyn HttpTransport, url: &str) -> Result<Option<Value>, FetchError> {
    let response = transport.get(url)?;

    if response.status != 200 {
        tracing::debug!("GET {} returned status {}", url, response.status);
        return Ok(None);
    }

    let doc = serde_json::from_str(&response.body)
        .map_err(|e| FetchError::InvalidJson(format!("Failed to parse body: {}", e)))?;

    Ok(Some(doc))
}

/// Fake transport for testing
pub struct FakeTransport {
    responses: Mutex<Vec<Result<HttpResponse, FetchError>>>,
    call_count: Mutex<usize>,
}

impl FakeTransport {
    /// Create a fake transport with pre-defined responses
    pub fn new(responses: Vec<Result<HttpResponse, FetchError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            call_count: Mutex::new(0),
        }
    }

    /// Create a fake transport that always returns the given status and body
    pub fn always(status: u16, body: impl Into<String>) -> Self {
        Self::new(vec![Ok(HttpResponse {
            status,
            body: body.into(),
        })])
    }

    /// Create a fake transport that always fails at the transport level
    pub fn always_error(error: FetchError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Get the number of calls made
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl HttpTransport for FakeTransport {
    fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(FetchError::Transport("No canned response".to_string()));
        }

        if responses.len() == 1 {
            // Keep returning the same response
            responses[0].clone()
        } else {
            responses.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fetch_ok_returns_document() {
        let transport = FakeTransport::always(200, r#"{"a": 1}"#);

        let result = fetch(&transport, "https://api.example.com/data");
        assert_eq!(result.unwrap(), Some(json!({"a": 1})));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_fetch_non_200_returns_none() {
        let transport = FakeTransport::always(404, r#"{"error": "not found"}"#);

        let result = fetch(&transport, "https://api.example.com/data");
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_fetch_only_exact_200_counts_as_success() {
        // 2xx is not enough; the check is against 200 exactly
        let transport = FakeTransport::always(204, "");

        let result = fetch(&transport, "https://api.example.com/data");
        assert_eq!(result.unwrap(), None);
    }

    #[test]
    fn test_fetch_malformed_body_is_an_error() {
        let transport = FakeTransport::always(200, "not-json");

        let result = fetch(&transport, "https://api.example.com/data");
        assert!(matches!(result, Err(FetchError::InvalidJson(_))));
    }

    #[test]
    fn test_fetch_transport_error_propagates() {
        let transport =
            FakeTransport::always_error(FetchError::Transport("connection refused".to_string()));

        let result = fetch(&transport, "https://api.example.com/data");
        assert!(matches!(result, Err(FetchError::Transport(_))));
        assert_eq!(transport.call_count(), 1);
    }

    #[test]
    fn test_fetch_non_object_json_is_returned_as_is() {
        let transport = FakeTransport::always(200, "[1, 2, 3]");

        let result = fetch(&transport, "https://api.example.com/data");
        assert_eq!(result.unwrap(), Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_fake_transport_multiple_responses() {
        let transport = FakeTransport::new(vec![
            Ok(HttpResponse {
                status: 200,
                body: r#"{"n": 1}"#.to_string(),
            }),
            Ok(HttpResponse {
                status: 500,
                body: String::new(),
            }),
        ]);

        let r1 = fetch(&transport, "");
        assert_eq!(r1.unwrap(), Some(json!({"n": 1})));

        let r2 = fetch(&transport, "");
        assert_eq!(r2.unwrap(), None);
        assert_eq!(transport.call_count(), 2);
    }
}
