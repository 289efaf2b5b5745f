//! # Transport Contract
//!
//! The HTTP layer is an external collaborator. Resources and collections only
//! know this trait: hand it a [`Request`], get back the parsed JSON body or a
//! [`TransportError`].
//!
//! Implementations:
//! - [`HttpTransport`](crate::http::HttpTransport) - `reqwest` over the network
//! - [`MockTransport`](crate::framework::mock::MockTransport) - scripted responses for tests

use crate::framework::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The HTTP verbs used by resources and collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request expecting a JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends requests and returns the decoded JSON response.
///
/// An empty response body must resolve to [`Value::Null`]. A body that is not
/// valid JSON is a [`TransportError::MalformedResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<Value, TransportError> {
        (**self).send(request).await
    }
}
