//! Error types for the Polly client
//!
//! All public APIs return `Result<T, ClientError>` where `ClientError` is
//! defined here. Faults are recovered at the wrapper boundary and handed
//! back to the caller as values; the caller decides whether a given fault
//! is acceptable (a duplicate registration, for instance, is an expected
//! outcome in test scenarios).

use serde_json::Value;
use thiserror::Error;

/// The main error type for the Polly client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Remote host unreachable, or the request failed before a response
    /// arrived. Carries no status code: this is a local/network fault, not
    /// a server response.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Response body was not valid JSON (or not the expected shape).
    #[error("invalid JSON response: {message}")]
    Decode { message: String },

    /// The server answered with a non-2xx status. The error payload is
    /// passed through verbatim.
    #[error("HTTP {status}: {body}")]
    Api { status: u16, body: Value },

    /// The aggregation loop hit its request safety bound before the data
    /// source signalled end-of-data.
    #[error("aggregation limit exceeded after {requests} requests")]
    AggregationLimit { requests: u32 },

    /// Malformed base URL.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an API error from a status and payload
    pub fn api(status: u16, body: impl Into<Value>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Status code of the server response, if the server responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 4xx server rejections (validation failures, duplicates)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(status) if (400..500).contains(&status))
    }

    /// True when the fault never reached the server
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Decode { .. } | Self::InvalidUrl(_)
        )
    }
}

/// Result type alias for the Polly client
pub type Result<T> = std::result::Result<T, ClientError>;
