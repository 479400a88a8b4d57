//! Error types for the Greypot document-generation client.
//!
//! [`GreypotError`] covers every failure a single generation attempt can hit,
//! from building the request to decoding the returned artifact. Each variant
//! carries enough context (template, URL, status, report id) for the caller to
//! build a useful message; nothing in the core presents errors to the user.
//!
//! [`ErrorKind`] collapses the variants into the coarse categories callers
//! branch on. Every kind is terminal for the attempt that produced it: there
//! is no retry and no fallback.

use thiserror::Error;

use crate::TemplateName;

// ---------------------------------------------------------------------------
// Error categories
// ---------------------------------------------------------------------------

/// Coarse classification of a [`GreypotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request data could not be serialised.
    Encoding,
    /// The exchange with the service failed: connection, I/O, timeout, or a
    /// non-success HTTP status.
    Transport,
    /// The service answered with a body that does not fit the response shape.
    Parse,
    /// The artifact payload is not valid base64.
    Decoding,
    /// The client was constructed with an unusable configuration.
    Configuration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Encoding => "EncodingError",
            Self::Transport => "TransportError",
            Self::Parse => "ParseError",
            Self::Decoding => "DecodingError",
            Self::Configuration => "ConfigurationError",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

/// Errors produced while generating a document.
#[derive(Debug, Error)]
pub enum GreypotError {
    /// The template data could not be represented as JSON.
    ///
    /// Produced by: [`crate::GenerateRequest::new`] and
    /// [`crate::GenerateRequest::to_json_bytes`].
    #[error("Failed to encode data for template '{template}': {source}")]
    Encoding {
        /// Template the request was being built for.
        template: TemplateName,
        /// Underlying serialiser failure.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be delivered or the response could not be read.
    #[error("Transport failure calling {url}: {message}")]
    Transport {
        /// Endpoint that was being called.
        url: String,
        /// Description of the transport failure.
        message: String,
        /// `true` when the configured timeout elapsed.
        timed_out: bool,
    },

    /// The service answered with a non-success HTTP status.
    ///
    /// Classified as [`ErrorKind::Transport`]; the body is kept verbatim
    /// (lossy UTF-8) because services usually explain the failure there.
    #[error("Service returned HTTP {status} from {url}: {body}")]
    HttpStatus {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code returned.
        status: u16,
        /// Response body.
        body: String,
    },

    /// The response body is not JSON or does not fit the response shape.
    #[error("Failed to parse response from {url}: {source}")]
    Parse {
        /// Endpoint that produced the body.
        url: String,
        /// Underlying deserialiser failure.
        #[source]
        source: serde_json::Error,
    },

    /// The `data` field of a response is not valid base64.
    #[error("Artifact data of report '{report_id}' is not valid base64: {source}")]
    Decoding {
        /// Report identifier assigned by the service (may be empty).
        report_id: String,
        /// Underlying decoder failure.
        #[source]
        source: base64::DecodeError,
    },

    /// The client configuration is invalid.
    ///
    /// Produced at construction time; a client never exists with an invalid
    /// configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl GreypotError {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::Transport { .. } | Self::HttpStatus { .. } => ErrorKind::Transport,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Decoding { .. } => ErrorKind::Decoding,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_is_a_transport_error() {
        let err = GreypotError::HttpStatus {
            url: "https://example.test/_studio/generate/pdf/a".into(),
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Transport);
        let message = err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("bad gateway"));
    }

    #[test]
    fn kind_display_uses_category_names() {
        assert_eq!(ErrorKind::Decoding.to_string(), "DecodingError");
        assert_eq!(ErrorKind::Parse.to_string(), "ParseError");
    }
}
