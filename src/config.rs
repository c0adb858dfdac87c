//! Configuration file support for dep-visualizer.
//!
//! Provides YAML-based configuration through `dep-visualizer.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{ImageFormat, ReportFormat};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-visualizer.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub max_depth: Option<usize>,
    pub filter: Option<String>,
    pub reverse: Option<bool>,
    pub renderer: Option<String>,
    pub image_format: Option<String>,
    pub report_format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `image_format`, if set. Validated on load.
    pub fn image_format(&self) -> Option<ImageFormat> {
        self.image_format.as_deref().and_then(|s| s.parse().ok())
    }

    /// Parsed `report_format`, if set. Validated on load.
    pub fn report_format(&self) -> Option<ReportFormat> {
        self.report_format.as_deref().and_then(|s| s.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref renderer) = config.renderer {
        if renderer.trim().is_empty() {
            bail!(
                "Invalid config: renderer must not be empty.\n\n\
                 💡 Hint: Set 'renderer' to the Graphviz executable (e.g., \"dot\") or remove the field."
            );
        }
    }
    if let Some(ref format) = config.image_format {
        if let Err(e) = format.parse::<ImageFormat>() {
            bail!("Invalid config: image_format: {}", e);
        }
    }
    if let Some(ref format) = config.report_format {
        if let Err(e) = format.parse::<ReportFormat>() {
            bail!("Invalid config: report_format: {}", e);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
