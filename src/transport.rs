//! HTTP transport for the registration request.
//!
//! The coordinator talks to the endpoint through the `RegistrationTransport`
//! trait so tests can stub the wire without a socket. The real
//! implementation is a thin `reqwest` wrapper: one POST, JSON body, JSON
//! reply. No retries and no auth headers by design.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;
use crate::model::RegistrationPayload;

/// One outbound registration request.
#[async_trait]
pub trait RegistrationTransport: Send + Sync {
    /// POST the payload to `url` and return the parsed JSON body.
    ///
    /// The body is returned regardless of HTTP status: business-level
    /// interpretation belongs to the caller, and the backend signals
    /// rejections inside 200 responses.
    async fn submit(&self, url: &str, payload: &RegistrationPayload)
    -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationTransport for HttpTransport {
    async fn submit(
        &self,
        url: &str,
        payload: &RegistrationPayload,
    ) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed { message: e.to_string() })?;

        tracing::debug!(status = %response.status(), "registration endpoint responded");

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::MalformedResponse { message: e.to_string() })
    }
}
