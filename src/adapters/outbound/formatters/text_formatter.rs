use crate::application::dto::{RenderStatus, VisualizationResponse};
use crate::graph_analysis::domain::{LevelAdjacency, PackageName};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextReportFormatter adapter for a human-readable run report
///
/// Lists the explored levels, then the diagram lines, then where the
/// artifacts ended up.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_levels(output: &mut String, title: &str, adjacency: &LevelAdjacency) {
        output.push_str(&format!("{}:\n", title));
        for entry in adjacency.entries() {
            let neighbors: Vec<&str> = entry.neighbors.iter().map(PackageName::as_str).collect();
            let neighbors = if neighbors.is_empty() {
                "(none)".to_string()
            } else {
                neighbors.join(", ")
            };
            output.push_str(&format!(
                "  [{}] {} -> {}\n",
                entry.depth, entry.package, neighbors
            ));
        }
        output.push('\n');
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, response: &VisualizationResponse) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Dependency graph for '{}' (max depth {})\n",
            response.package, response.max_depth
        ));
        if !response.filter.is_empty() {
            output.push_str(&format!("Excluding packages containing '{}'\n", response.filter));
        }
        output.push('\n');

        Self::render_levels(&mut output, "Dependencies", &response.dependencies);
        if let Some(dependents) = &response.dependents {
            Self::render_levels(&mut output, "Dependents", dependents);
        }

        output.push_str(&format!("Edges ({}):\n", response.diagram.edges().len()));
        for line in response.diagram.lines() {
            output.push_str(&format!("  {}\n", line));
        }
        output.push('\n');

        output.push_str(&format!(
            "Diagram source: {}\n",
            response.diagram_source_path.display()
        ));
        match &response.render_status {
            RenderStatus::Rendered => {
                output.push_str(&format!("Image: {}\n", response.image_path.display()));
            }
            RenderStatus::Skipped => output.push_str("Image: not rendered\n"),
            RenderStatus::Failed { .. } => output.push_str("Image: rendering failed\n"),
        }

        Ok(output)
    }
}
