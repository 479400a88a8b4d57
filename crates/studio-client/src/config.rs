//! Construction-time configuration for [`crate::StudioClient`].

use std::time::Duration;

use document::GreypotError;

/// Settings a [`crate::StudioClient`] is built from.
///
/// The base address is the only required value. The timeout is optional and
/// unset by default, in which case a call waits as long as the transport does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioClientConfig {
    base_url: String,
    timeout: Option<Duration>,
}

impl StudioClientConfig {
    /// Creates a configuration for the service at `base_url`.
    ///
    /// A single trailing `/` is dropped so endpoint paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: None,
        }
    }

    /// Bounds each generation call (connect, send, and full response read).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the base address without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Checks that the base address is an absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Configuration`] describing the problem.
    pub fn validate(&self) -> Result<(), GreypotError> {
        if self.base_url.is_empty() {
            return Err(GreypotError::Configuration {
                message: "base URL must not be empty".into(),
            });
        }

        let url = reqwest::Url::parse(&self.base_url).map_err(|e| GreypotError::Configuration {
            message: format!("invalid base URL '{}': {}", self.base_url, e),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(GreypotError::Configuration {
                    message: format!("unsupported URL scheme '{other}' in '{}'", self.base_url),
                })
            }
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(GreypotError::Configuration {
                message: format!("base URL '{}' must not carry a query or fragment", self.base_url),
            });
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(GreypotError::Configuration {
                message: "timeout must be greater than zero".into(),
            });
        }

        Ok(())
    }
}
