use crate::graph_analysis::domain::{DiagramSource, LevelAdjacency, PackageName};
use std::path::PathBuf;

/// Outcome of the rendering step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    /// The image was written to the output path
    Rendered,
    /// Rendering was not requested; only the diagram source exists
    Skipped,
    /// The renderer failed; the diagram source is the best artifact available
    Failed { reason: String },
}

impl RenderStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, RenderStatus::Failed { .. })
    }
}

/// VisualizationResponse - Response DTO from the visualization use case
#[derive(Debug, Clone)]
pub struct VisualizationResponse {
    /// Package the traversal started from
    pub package: PackageName,
    /// Depth bound that was applied
    pub max_depth: usize,
    /// Substring filter that was applied (empty when none)
    pub filter: String,
    /// Breadth-first adjacency over the dependencies of `package`
    pub dependencies: LevelAdjacency,
    /// Breadth-first adjacency over the dependents, when requested
    pub dependents: Option<LevelAdjacency>,
    /// Sorted diagram source for all collected edges
    pub diagram: DiagramSource,
    /// Where the diagram source was written
    pub diagram_source_path: PathBuf,
    /// Where the image was (or would have been) rendered
    pub image_path: PathBuf,
    /// What happened in the rendering step
    pub render_status: RenderStatus,
}
