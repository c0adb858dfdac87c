use crate::graph_analysis::domain::RawRepository;
use crate::ports::outbound::RepositoryReader;
use crate::shared::error::VisualizerError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Encodings a repository description can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepositoryEncoding {
    Json,
    Toml,
    Yaml,
}

impl RepositoryEncoding {
    /// Picks the decoder from the file extension, defaulting to JSON
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("toml") => RepositoryEncoding::Toml,
            Some("yml") | Some("yaml") => RepositoryEncoding::Yaml,
            _ => RepositoryEncoding::Json,
        }
    }

    fn decode(self, content: &str) -> std::result::Result<RawRepository, String> {
        match self {
            RepositoryEncoding::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            RepositoryEncoding::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            RepositoryEncoding::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// FileSystemReader adapter for reading repository descriptions from disk
///
/// Supports JSON, TOML and YAML, chosen by file extension.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryReader for FileSystemReader {
    fn read_repository(&self, location: &Path) -> Result<RawRepository> {
        if !location.exists() {
            return Err(VisualizerError::RepositoryNotFound {
                path: location.to_path_buf(),
            }
            .into());
        }

        validate_regular_file(location, "repository description").map_err(|e| {
            VisualizerError::InvalidRepositoryPath {
                path: location.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let content = fs::read_to_string(location).map_err(|e| {
            VisualizerError::InvalidRepositoryPath {
                path: location.to_path_buf(),
                reason: format!("Failed to read file: {}", e),
            }
        })?;

        RepositoryEncoding::from_path(location)
            .decode(&content)
            .map_err(|details| {
                VisualizerError::RepositoryParseError {
                    path: location.to_path_buf(),
                    details,
                }
                .into()
            })
    }
}
