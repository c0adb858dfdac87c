use dep_visualizer::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DiagramRenderer that records invocations
#[derive(Default, Clone)]
pub struct MockDiagramRenderer {
    pub calls: Arc<Mutex<Vec<(PathBuf, PathBuf, ImageFormat)>>>,
    should_fail: bool,
}

impl MockDiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf, ImageFormat)> {
        self.calls.lock().unwrap().clone()
    }
}

impl DiagramRenderer for MockDiagramRenderer {
    fn render(&self, source_path: &Path, output_path: &Path, format: ImageFormat) -> Result<()> {
        self.calls.lock().unwrap().push((
            source_path.to_path_buf(),
            output_path.to_path_buf(),
            format,
        ));
        if self.should_fail {
            return Err(VisualizerError::RenderFailed {
                tool: "mock-dot".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "syntax error in line 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
