//! Port trait for anything that can turn a [`GenerateRequest`] into a report.
//!
//! The HTTP implementation lives in the `studio-client` crate; callers depend
//! only on this trait so tests and alternative transports can stand in.

use async_trait::async_trait;

use crate::{GenerateRequest, GenerateResponse, GreypotError};

/// Generates documents from templates.
///
/// Each call is one independent, atomic request/response exchange. No state is
/// carried between calls and no call is retried.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Submits `request` and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError`] for encoding, transport, or parse failures.
    /// The artifact itself is not decoded here.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, GreypotError>;
}
