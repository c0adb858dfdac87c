use dep_visualizer::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DiagramWriter that captures written diagrams in memory
#[derive(Default, Clone)]
pub struct MockDiagramWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
    should_fail: bool,
}

impl MockDiagramWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<(PathBuf, String)> {
        self.written.lock().unwrap().clone()
    }
}

impl DiagramWriter for MockDiagramWriter {
    fn write_diagram(&self, path: &Path, content: &str) -> Result<()> {
        if self.should_fail {
            return Err(VisualizerError::FileWriteError {
                path: path.to_path_buf(),
                details: "Mock write failure".to_string(),
            }
            .into());
        }
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
