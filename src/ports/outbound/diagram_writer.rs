use crate::shared::Result;
use std::path::Path;

/// DiagramWriter port for persisting diagram source text
pub trait DiagramWriter {
    /// Writes `content` to `path`, replacing any previous file
    ///
    /// # Errors
    /// Returns an error if the parent directory is missing, the path is a
    /// symbolic link, or the write itself fails.
    fn write_diagram(&self, path: &Path, content: &str) -> Result<()>;
}
