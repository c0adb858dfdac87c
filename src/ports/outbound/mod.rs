/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, renderer process, console).
pub mod diagram_renderer;
pub mod diagram_writer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod repository_reader;

pub use diagram_renderer::DiagramRenderer;
pub use diagram_writer::DiagramWriter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use repository_reader::RepositoryReader;
