use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Keeps the choice of formatter adapter out of the entry point.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Examples
    /// ```
    /// use dep_visualizer::application::dto::ReportFormat;
    /// use dep_visualizer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Json);
    /// ```
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(TextReportFormatter::new()),
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified report format
    ///
    /// # Examples
    /// ```
    /// use dep_visualizer::application::dto::ReportFormat;
    /// use dep_visualizer::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ReportFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Text => "📝 Generating text report...",
            ReportFormat::Json => "📝 Generating JSON report...",
        }
    }
}
