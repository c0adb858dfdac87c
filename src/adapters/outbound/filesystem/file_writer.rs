use crate::ports::outbound::{DiagramWriter, OutputPresenter};
use crate::shared::error::VisualizerError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// FileSystemWriter adapter for writing diagram sources to files
///
/// This adapter implements the DiagramWriter port. Existing files are
/// overwritten, symbolic links are refused.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(VisualizerError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramWriter for FileSystemWriter {
    fn write_diagram(&self, path: &Path, content: &str) -> Result<()> {
        Self::validate_parent_directory(path)?;
        validate_not_symlink(path).map_err(|e| VisualizerError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| VisualizerError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the run report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
