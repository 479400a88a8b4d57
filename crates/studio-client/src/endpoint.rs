//! Endpoint resolution for the generation API.

use document::TemplateName;

/// Path prefix of the PDF generation endpoint, relative to the base address.
pub const GENERATE_PDF_PATH: &str = "/_studio/generate/pdf/";

/// Returns the generation URL for `template` under `base_url`.
///
/// `base_url` is expected without a trailing slash (see
/// [`crate::StudioClientConfig::new`]). The template name is appended as-is;
/// [`TemplateName`] already guarantees it is a single safe path segment.
pub fn generate_endpoint(base_url: &str, template: &TemplateName) -> String {
    format!("{base_url}{GENERATE_PDF_PATH}{template}")
}
