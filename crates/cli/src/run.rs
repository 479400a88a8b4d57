//! One generation run: read the template and data, call the service, decode
//! the artifact, and save it.
//!
//! Local reads happen before the network call, so a missing template never
//! reaches the service. The output file is always written as-is regardless of
//! the declared artifact type.

use std::path::{Path, PathBuf};

use document::{DocumentGenerator, GenerateRequest, TemplateName};
use tracing::{info, instrument};

use crate::error::CliError;

/// Output file used when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "generated.pdf";

/// Inputs for a single run, as collected from the command line.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub template_path: PathBuf,
    /// Overrides the template name derived from `template_path`.
    pub template_name: Option<String>,
    /// JSON file with the template data; `{}` when absent.
    pub data_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub report_id: String,
    pub artifact_type: String,
    pub output_path: PathBuf,
    pub bytes: usize,
}

impl GenerationPlan {
    /// Returns the template identifier: the explicit name if given, else the
    /// template's file name.
    pub fn template_name(&self) -> Result<TemplateName, CliError> {
        let value = match &self.template_name {
            Some(name) => name.clone(),
            None => self
                .template_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        TemplateName::new(value.clone()).ok_or(CliError::InvalidTemplateName { value })
    }
}

#[instrument(skip_all, fields(template = %plan.template_path.display()))]
pub async fn run(
    generator: &dyn DocumentGenerator,
    plan: &GenerationPlan,
) -> Result<GenerationSummary, CliError> {
    let name = plan.template_name()?;

    let template = tokio::fs::read(&plan.template_path)
        .await
        .map_err(|source| CliError::TemplateRead {
            path: plan.template_path.clone(),
            source,
        })?;
    let template = String::from_utf8(template).map_err(|source| CliError::TemplateEncoding {
        path: plan.template_path.clone(),
        source,
    })?;

    let data = match &plan.data_path {
        Some(path) => read_data(path).await?,
        None => serde_json::Value::Object(serde_json::Map::new()),
    };

    let request = GenerateRequest::from_value(name, template, data);
    let response = generator.generate(&request).await?;
    info!(
        report_id = response.report_id(),
        artifact_type = response.artifact_type(),
        "Report generated"
    );

    let artifact = response.decode()?;
    tokio::fs::write(&plan.output_path, artifact.as_bytes())
        .await
        .map_err(|source| CliError::OutputWrite {
            path: plan.output_path.clone(),
            source,
        })?;
    info!(path = %plan.output_path.display(), bytes = artifact.len(), "Artifact saved");

    Ok(GenerationSummary {
        report_id: response.report_id().to_owned(),
        artifact_type: response.artifact_type().to_owned(),
        output_path: plan.output_path.clone(),
        bytes: artifact.len(),
    })
}

async fn read_data(path: &Path) -> Result<serde_json::Value, CliError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| CliError::DataParse {
        path: path.to_path_buf(),
        source,
    })
}
