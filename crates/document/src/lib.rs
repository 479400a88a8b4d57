//! Core domain for the Greypot Studio document-generation client.
//!
//! This crate contains the wire contract with the remote service (request and
//! response shapes), the template identifier newtype, artifact decoding, and
//! the error type shared by every crate in the workspace. Infrastructure
//! crates implement the [`DocumentGenerator`] port defined here; they never
//! add contract rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is sent and received; infrastructure crates define *how*
//! it travels.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`TemplateName`) |
//! | [`request`] | `GenerateRequest` and its JSON wire form |
//! | [`response`] | `GenerateResponse` as returned by the service |
//! | [`artifact`] | Base64 artifact decoding into `DecodedArtifact` |
//! | [`generator`] | The `DocumentGenerator` port trait |
//! | [`errors`] | `GreypotError` and its coarse `ErrorKind` |

pub mod artifact;
pub mod errors;
pub mod generator;
pub mod identifiers;
pub mod request;
pub mod response;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use artifact::{decode, DecodedArtifact};
pub use errors::{ErrorKind, GreypotError};
pub use generator::DocumentGenerator;
pub use identifiers::TemplateName;
pub use request::GenerateRequest;
pub use response::GenerateResponse;
