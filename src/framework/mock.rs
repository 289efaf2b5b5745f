//! # Mock Transport
//!
//! Utilities for testing resources and collections without a server.
//!
//! Queue the responses you expect with [`MockTransport::expect`], run the code
//! under test, then call [`MockTransport::verify`] to make sure every scripted
//! request actually happened.
//!
//! ```rust,ignore
//! let mock = MockTransport::new();
//! mock.expect(Method::Post, "/contacts").return_ok(json!({"id": 1}));
//!
//! contact.save(&mock).await?;
//!
//! mock.verify();
//! assert_eq!(mock.requests()[0].body, Some(contact.serialize()));
//! ```

use crate::framework::{Method, Request, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted request and the response to hand back for it.
#[derive(Debug)]
struct Expectation {
    method: Method,
    url: String,
    response: Result<Value, TransportError>,
    delay: Option<Duration>,
}

/// A transport that answers from a queue of expectations, in order.
///
/// Every request is recorded, whether or not it matched. A request that does
/// not match the next expectation (or arrives when none is left) fails with
/// [`TransportError::Unexpected`].
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with the given method and URL.
    pub fn expect(&self, method: Method, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            url: url.into(),
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// All requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let next = self.expectations.lock().unwrap().pop_front();
        let Some(expectation) = next else {
            warn!(method = %request.method, url = %request.url, "No expectation left");
            return Err(TransportError::Unexpected(format!(
                "{} {}",
                request.method, request.url
            )));
        };

        if expectation.method != request.method || expectation.url != request.url {
            warn!(
                expected = %format!("{} {}", expectation.method, expectation.url),
                got = %format!("{} {}", request.method, request.url),
                "Expectation mismatch"
            );
            return Err(TransportError::Unexpected(format!(
                "expected {} {}, got {} {}",
                expectation.method, expectation.url, request.method, request.url
            )));
        }

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    url: String,
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Holds the response back for `delay` before answering.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, body: Value) {
        self.push(Ok(body));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, TransportError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            url: self.url,
            response,
            delay: self.delay,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_transport_with_expectations() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "/contacts").return_ok(json!([{"id": 1}]));
        mock.expect(Method::Delete, "/contacts/1")
            .return_err(TransportError::Status { status: 500, body: String::new() });

        let listed = mock.send(Request::new(Method::Get, "/contacts")).await;
        assert_eq!(listed, Ok(json!([{"id": 1}])));

        let deleted = mock.send(Request::new(Method::Delete, "/contacts/1")).await;
        assert!(matches!(deleted, Err(TransportError::Status { status: 500, .. })));

        mock.verify();
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_transport_rejects_mismatch() {
        let mock = MockTransport::new();
        mock.expect(Method::Put, "/contacts/2").return_ok(Value::Null);

        let result = mock.send(Request::new(Method::Post, "/contacts")).await;
        assert!(matches!(result, Err(TransportError::Unexpected(_))));

        let result = mock.send(Request::new(Method::Get, "/contacts")).await;
        assert!(matches!(result, Err(TransportError::Unexpected(_))));
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_panics_on_leftovers() {
        let mock = MockTransport::new();
        mock.expect(Method::Get, "/contacts").return_ok(json!([]));
        mock.verify();
    }
}
