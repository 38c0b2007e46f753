//! Client runtime configuration.
//!
//! The remote endpoint is resolved once at process startup and then passed into connection setup.
//! Nothing reads process-wide state while a call is in flight.

use crate::{ClientError, ClientResult};

/// Address of the reference deployment.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:30000";

/// Client configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
}

impl ClientConfig {
    /// Create a new `ClientConfig`.
    ///
    /// The endpoint must be a plaintext `http://` URI with a host; the channel is never secured.
    pub fn new(endpoint: impl Into<String>) -> ClientResult<Self> {
        let endpoint = endpoint.into().trim().to_string();

        if !endpoint.starts_with("http://") {
            return Err(ClientError::InvalidEndpoint {
                endpoint,
                reason: "only plaintext http:// endpoints are supported",
            });
        }
        if endpoint["http://".len()..].trim_end_matches('/').is_empty() {
            return Err(ClientError::InvalidEndpoint {
                endpoint,
                reason: "missing host",
            });
        }

        Ok(Self { endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
