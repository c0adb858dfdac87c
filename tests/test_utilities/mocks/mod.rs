/// Mock implementations for testing
mod mock_diagram_renderer;
mod mock_diagram_writer;
mod mock_progress_reporter;
mod mock_repository_reader;

pub use mock_diagram_renderer::MockDiagramRenderer;
pub use mock_diagram_writer::MockDiagramWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_reader::MockRepositoryReader;
