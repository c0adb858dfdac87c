use crate::application::dto::VisualizationResponse;
use crate::shared::Result;

/// ReportFormatter port for turning a visualization result into text
pub trait ReportFormatter {
    /// Formats the response for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &VisualizationResponse) -> Result<String>;
}
