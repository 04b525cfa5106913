//! API operations
//!
//! The operations mirror the Polly API surface one-to-one: every function
//! is a single HTTP request plus response-status branching. Server
//! rejections come back as [`ClientError::Api`] with the error payload
//! passed through verbatim; no validation happens locally.

mod polls;
mod register;

pub use polls::PollPage;
pub use register::Registration;

use crate::error::{ClientError, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::JsonValue;
use reqwest::Response;
use url::Url;

/// Client for the Polly poll-management API
#[derive(Debug)]
pub struct PollyClient {
    http: HttpClient,
}

impl PollyClient {
    /// Create a client for the API at `base_url`
    ///
    /// The URL is validated up front so a typo fails here instead of on
    /// the first request.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base = Url::parse(base_url.as_ref())?;
        let config = HttpClientConfig::builder().base_url(base.as_str()).build();
        Ok(Self::with_config(config))
    }

    /// Create a client from a prepared transport configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        Self {
            http: HttpClient::with_config(config),
        }
    }

    /// The underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Read the response body, folding read failures into a connection fault
async fn read_body(response: Response) -> Result<(u16, String)> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| ClientError::connection(format!("failed to read response body: {e}")))?;
    Ok((status, text))
}

/// Best-effort decode of an error payload
///
/// Server error bodies are usually JSON but nothing guarantees it; an
/// undecodable body is carried through opaquely as a JSON string.
fn error_body(text: &str) -> JsonValue {
    serde_json::from_str(text).unwrap_or_else(|_| JsonValue::String(text.to_string()))
}
