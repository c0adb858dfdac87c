use crate::application::dto::ImageFormat;
use crate::shared::Result;
use std::path::Path;

/// DiagramRenderer port for turning diagram source into an image
///
/// The renderer is an external collaborator; its failure is recoverable
/// because the diagram source file is already on disk.
pub trait DiagramRenderer {
    /// Renders the diagram source at `source_path` into `output_path`
    ///
    /// # Errors
    /// Returns `VisualizerError::RenderFailed` if the renderer cannot be
    /// started or reports failure.
    fn render(&self, source_path: &Path, output_path: &Path, format: ImageFormat) -> Result<()>;
}
