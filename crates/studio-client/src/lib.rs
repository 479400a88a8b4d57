//! Greypot Studio HTTP client adapter.
//!
//! Implements the [`document::DocumentGenerator`] trait over the Studio
//! generation API: a JSON request POSTed to
//! `{base}/_studio/generate/pdf/{template}` and a JSON response carrying the
//! generated artifact as base64 text.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Endpoint resolution, HTTP transport, status handling,
//! and response parsing all live here. The [`document`] crate sees only
//! [`document::DocumentGenerator`].
//!
//! ## Transport
//!
//! [`StudioClient`] is generic over the [`Transport`] seam. Production code
//! uses [`ReqwestTransport`]; tests substitute a stub that returns canned
//! responses. Every call is a single exchange: no retries, no caching, and no
//! connection reuse beyond what `reqwest` does by default.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod transport;

pub use client::StudioClient;
pub use config::StudioClientConfig;
pub use endpoint::{generate_endpoint, GENERATE_PDF_PATH};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
