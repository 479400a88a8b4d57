//! The outbound generation request.
//!
//! Field names on the wire are `Name`, `Template` and `Data`, capitalised
//! exactly as the service expects. `Data` is opaque to this client: the
//! template defines its shape, so it is carried as a [`serde_json::Value`].

use serde::{Deserialize, Serialize};

use crate::{GreypotError, TemplateName};

/// A single document-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Template identifier; also the last segment of the endpoint path.
    #[serde(rename = "Name")]
    name: TemplateName,

    /// Raw template body (e.g. HTML markup). May be empty.
    #[serde(rename = "Template")]
    template: String,

    /// Free-form data rendered into the template.
    #[serde(rename = "Data")]
    data: serde_json::Value,
}

impl GenerateRequest {
    /// Builds a request from any serialisable data value.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Encoding`] if `data` has no JSON representation
    /// (e.g. a map keyed by something other than strings, or a `Serialize`
    /// impl that reports an error).
    pub fn new<D>(
        name: TemplateName,
        template: impl Into<String>,
        data: &D,
    ) -> Result<Self, GreypotError>
    where
        D: Serialize + ?Sized,
    {
        let data = serde_json::to_value(data).map_err(|source| GreypotError::Encoding {
            template: name.clone(),
            source,
        })?;
        Ok(Self::from_value(name, template, data))
    }

    /// Builds a request from data that is already a JSON value.
    pub fn from_value(name: TemplateName, template: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            name,
            template: template.into(),
            data,
        }
    }

    /// Returns the template identifier.
    pub fn name(&self) -> &TemplateName {
        &self.name
    }

    /// Returns the template body.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the template data.
    pub fn data(&self) -> &serde_json::Value {
        &self.data
    }

    /// Serialises the request into its JSON wire body.
    ///
    /// # Errors
    ///
    /// Returns [`GreypotError::Encoding`] if serialisation fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, GreypotError> {
        serde_json::to_vec(self).map_err(|source| GreypotError::Encoding {
            template: self.name.clone(),
            source,
        })
    }
}
