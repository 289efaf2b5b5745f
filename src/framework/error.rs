//! # Resource Errors
//!
//! Every failure a resource or collection can report is a [`ResourceError`].
//! Failures that originate in the HTTP collaborator are wrapped unchanged in
//! [`ResourceError::Transport`]; this layer never retries or suppresses them.

use thiserror::Error;

/// Result type for resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Errors reported by a [`Transport`](crate::framework::Transport).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be parsed as JSON.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The transport could not be built from its configuration.
    #[error("Invalid transport configuration: {0}")]
    InvalidConfig(String),

    /// The transport received a request it was not prepared to handle.
    #[error("Unexpected request: {0}")]
    Unexpected(String),
}

/// Errors that can occur during resource and collection operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ResourceError {
    /// `validate()` rejected the record before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The transport failed; carried as-is.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// JSON of the wrong shape was handed to `deserialize` or `load_all`.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A codec or field setter rejected a value.
    #[error("Field `{field}`: {reason}")]
    Field { field: String, reason: String },
}

impl ResourceError {
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ResourceError::Field {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True if the failure happened locally, before any request was issued.
    pub fn is_validation(&self) -> bool {
        matches!(self, ResourceError::Validation(_))
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(e: serde_json::Error) -> Self {
        ResourceError::InvalidPayload(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_bare_message() {
        let err = ResourceError::Validation("bad".into());
        assert_eq!(err.to_string(), "bad");
        assert!(err.is_validation());
    }

    #[test]
    fn transport_error_is_transparent() {
        let err: ResourceError = TransportError::Status { status: 404, body: "nope".into() }.into();
        assert_eq!(err.to_string(), "HTTP 404: nope");
        assert!(!err.is_validation());
    }
}
