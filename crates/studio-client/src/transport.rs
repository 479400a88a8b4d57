//! The HTTP transport seam.
//!
//! [`Transport`] carries one JSON POST and hands back the status and the full
//! body. It makes no judgement about either: status handling and parsing belong
//! to [`crate::StudioClient`].

use std::time::Duration;

use async_trait::async_trait;
use document::GreypotError;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

/// Status code and complete body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Entire response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single JSON request and waits for the complete response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url` with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Transport`] if the request cannot be sent or the
    /// response body cannot be read in full.
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<TransportResponse, GreypotError>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport, optionally bounding each exchange by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Configuration`] if the HTTP client cannot be
    /// initialised (e.g. no TLS backend available).
    pub fn new(timeout: Option<Duration>) -> Result<Self, GreypotError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| GreypotError::Configuration {
            message: format!("failed to initialise HTTP client: {e}"),
        })?;
        Ok(Self { client })
    }
}

fn transport_error(url: &str, err: &reqwest::Error) -> GreypotError {
    GreypotError::Transport {
        url: url.to_owned(),
        message: err.to_string(),
        timed_out: err.is_timeout(),
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: Vec<u8>) -> Result<TransportResponse, GreypotError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| transport_error(url, &e))?;
        debug!(status, bytes = body.len(), "Received response");

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_the_2xx_range() {
        let response = |status| TransportResponse { status, body: Vec::new() };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(500).is_success());
    }
}
