//! The generation response returned by the service.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{DecodedArtifact, GreypotError};

/// A generated report as returned by the service.
///
/// Fields missing from the response body are left empty; the client does not
/// check that the service filled them in. The artifact stays base64 text until
/// [`GenerateResponse::decode`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateResponse {
    /// Opaque identifier the service assigned to this report.
    #[serde(rename = "reportId", deserialize_with = "null_as_empty")]
    report_id: String,

    /// Declared format of the artifact (e.g. `"pdf"`).
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    artifact_type: String,

    /// Artifact bytes, base64 encoded.
    #[serde(deserialize_with = "null_as_empty")]
    data: String,
}

/// Treats an explicit `null` like an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerateResponse {
    /// Creates a response from its parts.
    pub fn new(
        report_id: impl Into<String>,
        artifact_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            report_id: report_id.into(),
            artifact_type: artifact_type.into(),
            data: data.into(),
        }
    }

    /// Returns the report identifier.
    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    /// Returns the declared artifact type.
    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    /// Returns the artifact as the base64 text received from the service.
    pub fn encoded_data(&self) -> &str {
        &self.data
    }

    /// Decodes the artifact into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Decoding`] if `data` is not valid base64.
    pub fn decode(&self) -> Result<DecodedArtifact, GreypotError> {
        crate::decode(self)
    }
}
