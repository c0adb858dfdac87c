use crate::application::dto::{RenderStatus, VisualizationResponse};
use crate::graph_analysis::domain::{LevelAdjacency, PackageName};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    package: &'a PackageName,
    #[serde(rename = "maxDepth")]
    max_depth: usize,
    #[serde(skip_serializing_if = "str::is_empty")]
    filter: &'a str,
    dependencies: &'a LevelAdjacency,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependents: Option<&'a LevelAdjacency>,
    edges: &'a [String],
    artifacts: Artifacts,
}

#[derive(Debug, Serialize)]
struct Artifacts {
    #[serde(rename = "diagramSource")]
    diagram_source: String,
    image: String,
    render: &'static str,
    #[serde(rename = "renderError", skip_serializing_if = "Option::is_none")]
    render_error: Option<String>,
}

/// JsonReportFormatter adapter for a machine-readable run report
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, response: &VisualizationResponse) -> Result<String> {
        let (render, render_error) = match &response.render_status {
            RenderStatus::Rendered => ("rendered", None),
            RenderStatus::Skipped => ("skipped", None),
            RenderStatus::Failed { reason } => ("failed", Some(reason.clone())),
        };

        let report = Report {
            package: &response.package,
            max_depth: response.max_depth,
            filter: &response.filter,
            dependencies: &response.dependencies,
            dependents: response.dependents.as_ref(),
            edges: response.diagram.lines(),
            artifacts: Artifacts {
                diagram_source: response.diagram_source_path.display().to_string(),
                image: response.image_path.display().to_string(),
                render,
                render_error,
            },
        };

        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    }
}
