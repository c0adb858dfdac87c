/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case and the adapters,
/// keeping the graph analysis domain isolated.
mod image_format;
mod report_format;
mod visualization_request;
mod visualization_response;

pub use image_format::ImageFormat;
pub use report_format::ReportFormat;
pub use visualization_request::{
    VisualizationRequest, VisualizationRequestBuilder, DEFAULT_MAX_DEPTH, DEFAULT_RENDERER,
};
pub use visualization_response::{RenderStatus, VisualizationResponse};
