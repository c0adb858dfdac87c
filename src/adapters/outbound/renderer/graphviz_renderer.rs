use crate::application::dto::{ImageFormat, DEFAULT_RENDERER};
use crate::ports::outbound::DiagramRenderer;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::path::Path;
use std::process::Command;

/// GraphvizRenderer adapter invoking a Graphviz-compatible executable
///
/// Runs `<executable> -T<format> <source> -o <output>` and waits for it.
pub struct GraphvizRenderer {
    executable: String,
}

impl GraphvizRenderer {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    fn failure(&self, status: String, stderr: String) -> anyhow::Error {
        VisualizerError::RenderFailed {
            tool: self.executable.clone(),
            status,
            stderr,
        }
        .into()
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER)
    }
}

impl DiagramRenderer for GraphvizRenderer {
    fn render(&self, source_path: &Path, output_path: &Path, format: ImageFormat) -> Result<()> {
        let output = Command::new(&self.executable)
            .arg(format!("-T{}", format.as_str()))
            .arg(source_path)
            .arg("-o")
            .arg(output_path)
            .output()
            .map_err(|e| self.failure("could not be started".to_string(), e.to_string()))?;

        if !output.status.success() {
            return Err(self.failure(
                output.status.to_string(),
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_executable() {
        assert_eq!(GraphvizRenderer::default().executable(), "dot");
    }

    #[test]
    fn test_missing_executable_is_render_failure() {
        let renderer = GraphvizRenderer::new("dep-visualizer-no-such-renderer");
        let err = renderer
            .render(Path::new("graph.dot"), Path::new("graph.png"), ImageFormat::Png)
            .unwrap_err();

        let err_string = err.to_string();
        assert!(err_string.contains("dep-visualizer-no-such-renderer"));
        assert!(err_string.contains("could not be started"));
        assert!(matches!(
            err.downcast_ref::<VisualizerError>(),
            Some(VisualizerError::RenderFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_exit_is_ok() {
        let renderer = GraphvizRenderer::new("true");
        assert!(renderer
            .render(Path::new("graph.dot"), Path::new("graph.svg"), ImageFormat::Svg)
            .is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_exit_is_render_failure() {
        let renderer = GraphvizRenderer::new("false");
        let err = renderer
            .render(Path::new("graph.dot"), Path::new("graph.png"), ImageFormat::Png)
            .unwrap_err();
        assert!(err.to_string().contains("Diagram renderer 'false' failed"));
    }
}
