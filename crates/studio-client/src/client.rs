//! The Greypot Studio client.

use async_trait::async_trait;
use document::{DocumentGenerator, GenerateRequest, GenerateResponse, GreypotError, TemplateName};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{generate_endpoint, ReqwestTransport, StudioClientConfig, Transport};

/// Client for the Greypot Studio generation API.
///
/// Holds only immutable configuration and the transport handle, so one client
/// can be shared freely; each call is still an independent exchange.
#[derive(Debug, Clone)]
pub struct StudioClient<T = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl StudioClient<ReqwestTransport> {
    /// Creates a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Configuration`] if `config` is invalid or the
    /// HTTP client cannot be initialised.
    pub fn new(config: StudioClientConfig) -> Result<Self, GreypotError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> StudioClient<T> {
    /// Creates a client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Configuration`] if `config` is invalid.
    pub fn with_transport(config: StudioClientConfig, transport: T) -> Result<Self, GreypotError> {
        config.validate()?;
        debug!(base_url = config.base_url(), timeout = ?config.timeout(), "Created Studio client");
        Ok(Self {
            base_url: config.base_url().to_owned(),
            transport,
        })
    }

    /// Returns the configured base address.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the generation URL for `template`.
    pub fn endpoint_for(&self, template: &TemplateName) -> String {
        generate_endpoint(&self.base_url, template)
    }

    /// Renders `template_body` with `data` under the name `template`.
    ///
    /// Builds the request, sends it, and parses the response. The artifact is
    /// returned still encoded; call [`GenerateResponse::decode`] to get bytes.
    ///
    /// # Errors
    ///
    /// - [`GreypotError::Encoding`] if `data` cannot be serialised.
    /// - [`GreypotError::Transport`] or [`GreypotError::HttpStatus`] if the
    ///   exchange fails or the service answers with a non-2xx status.
    /// - [`GreypotError::Parse`] if the response body does not fit
    ///   [`GenerateResponse`].
    pub async fn generate_document<D>(
        &self,
        template: &TemplateName,
        template_body: &str,
        data: &D,
    ) -> Result<GenerateResponse, GreypotError>
    where
        D: Serialize + ?Sized,
    {
        let request = GenerateRequest::new(template.clone(), template_body, data)?;
        self.generate(&request).await
    }
}

#[async_trait]
impl<T: Transport> DocumentGenerator for StudioClient<T> {
    #[instrument(skip(self, request), fields(template = %request.name()))]
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GreypotError> {
        let url = self.endpoint_for(request.name());
        let body = request.to_json_bytes()?;
        debug!(url = %url, bytes = body.len(), "Sending generation request");

        let response = self.transport.post_json(&url, body).await?;

        if !response.is_success() {
            return Err(GreypotError::HttpStatus {
                url,
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_slice(&response.body).map_err(|source| GreypotError::Parse {
                url: url.clone(),
                source,
            })?;

        debug!(
            report_id = parsed.report_id(),
            artifact_type = parsed.artifact_type(),
            "Parsed generation response"
        );
        Ok(parsed)
    }
}
