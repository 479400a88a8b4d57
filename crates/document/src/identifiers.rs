//! Newtype domain identifiers.
//!
//! The template identifier plays two roles on the wire: it labels the template
//! inside the request body and it is the final path segment of the generation
//! endpoint. Wrapping it in [`TemplateName`] means the endpoint builder never
//! sees a value that could escape its path segment.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Template identifier
// ---------------------------------------------------------------------------

/// Identifies a template on the Greypot Studio service (e.g. `"invoice.html"`).
///
/// Guaranteed non-empty and usable verbatim as a single URL path segment: no
/// `/`, `\`, `?`, `#`, `%`, whitespace or control characters, and never one of
/// the dot segments `.` or `..`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateName(String);

impl TemplateName {
    /// Creates a new template name, returning `None` if the value is empty or
    /// not a valid path segment.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if is_path_segment(&v) {
            Some(Self(v))
        } else {
            None
        }
    }

    /// Returns the template name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_path_segment(value: &str) -> bool {
    if value.is_empty() || value == "." || value == ".." {
        return false;
    }
    !value
        .chars()
        .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
}

impl std::fmt::Display for TemplateName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TemplateName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.clone()).ok_or_else(|| format!("invalid template name: {value:?}"))
    }
}

impl From<TemplateName> for String {
    fn from(name: TemplateName) -> Self {
        name.0
    }
}
