use super::ImageFormat;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::path::PathBuf;

/// Default number of hops explored from the start package
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default renderer executable
pub const DEFAULT_RENDERER: &str = "dot";

/// VisualizationRequest - Request DTO for the visualization use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationRequest {
    /// Path of the repository description file
    pub repository_path: PathBuf,
    /// Package the traversal starts from
    pub package: String,
    /// Maximum number of hops explored from `package`
    pub max_depth: usize,
    /// Packages whose name contains this substring are left out; empty keeps all
    pub filter: String,
    /// Whether to also explore the packages that depend on `package`
    pub include_dependents: bool,
    /// Path of the rendered image
    pub output_path: PathBuf,
    /// Format requested from the renderer
    pub image_format: ImageFormat,
    /// Whether to invoke the renderer at all
    pub render: bool,
}

impl VisualizationRequest {
    pub fn builder() -> VisualizationRequestBuilder {
        VisualizationRequestBuilder::default()
    }

    /// Path of the diagram source file written next to the image
    pub fn diagram_source_path(&self) -> PathBuf {
        self.output_path.with_extension("dot")
    }

    /// True if an image should be produced from the diagram source
    ///
    /// An output path that already names a `.dot` file only gets the source.
    pub fn should_render(&self) -> bool {
        self.render && self.output_path != self.diagram_source_path()
    }
}

/// Builder for `VisualizationRequest`
#[derive(Debug, Default)]
pub struct VisualizationRequestBuilder {
    repository_path: Option<PathBuf>,
    package: Option<String>,
    max_depth: Option<usize>,
    filter: Option<String>,
    include_dependents: bool,
    output_path: Option<PathBuf>,
    image_format: Option<ImageFormat>,
    skip_render: bool,
}

impl VisualizationRequestBuilder {
    pub fn repository_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.repository_path = Some(path.into());
        self
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn include_dependents(mut self, include: bool) -> Self {
        self.include_dependents = include;
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn image_format(mut self, format: ImageFormat) -> Self {
        self.image_format = Some(format);
        self
    }

    pub fn skip_render(mut self, skip: bool) -> Self {
        self.skip_render = skip;
        self
    }

    /// Builds the request
    ///
    /// The image format falls back to the output path's extension, then PNG.
    ///
    /// # Errors
    /// Returns `VisualizerError::Validation` if the repository path, the
    /// package or the output path is missing or empty.
    pub fn build(self) -> Result<VisualizationRequest> {
        let repository_path = self
            .repository_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| validation("repository path must not be empty"))?;
        let package = self
            .package
            .filter(|package| !package.trim().is_empty())
            .ok_or_else(|| validation("package name must not be empty"))?;
        let output_path = self
            .output_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| validation("output file must not be empty"))?;
        let image_format = self
            .image_format
            .or_else(|| ImageFormat::from_path(&output_path))
            .unwrap_or_default();

        Ok(VisualizationRequest {
            repository_path,
            package,
            max_depth: self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            filter: self.filter.unwrap_or_default(),
            include_dependents: self.include_dependents,
            output_path,
            image_format,
            render: !self.skip_render,
        })
    }
}

fn validation(message: &str) -> anyhow::Error {
    VisualizerError::Validation {
        message: message.to_string(),
    }
    .into()
}
