use dep_visualizer::prelude::*;
use std::path::Path;

/// Mock RepositoryReader that decodes an in-memory JSON document
pub struct MockRepositoryReader {
    content: String,
    should_fail: bool,
}

impl MockRepositoryReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl RepositoryReader for MockRepositoryReader {
    fn read_repository(&self, location: &Path) -> Result<RawRepository> {
        if self.should_fail {
            return Err(VisualizerError::RepositoryNotFound {
                path: location.to_path_buf(),
            }
            .into());
        }
        Ok(serde_json::from_str(&self.content)?)
    }
}
