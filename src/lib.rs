//! dep-visualizer - dependency graph visualization for package repositories
//!
//! This library reads a repository description (package name to dependency
//! list), explores the dependencies of one package up to a depth bound, and
//! produces Graphviz diagram source for the explored subgraph. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_analysis`): Graph model, traversal and diagram generation
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_visualizer::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case
//! let use_case = VisualizeDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(),
//!     GraphvizRenderer::default(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = VisualizationRequest::builder()
//!     .repository_path("repository.json")
//!     .package("flask")
//!     .max_depth(2)
//!     .output_path("flask.svg")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! for line in response.diagram.lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::renderer::GraphvizRenderer;
    pub use crate::application::dto::{
        ImageFormat, RenderStatus, ReportFormat, VisualizationRequest, VisualizationResponse,
    };
    pub use crate::application::use_cases::VisualizeDependenciesUseCase;
    pub use crate::graph_analysis::domain::{
        CollectedEdges, DependencyGraph, DiagramSource, Edge, LevelAdjacency, PackageName,
        RawRepository,
    };
    pub use crate::graph_analysis::services::{
        DiagramSourceGenerator, PackageFilter, RepositoryModel, ReverseGraphBuilder,
        TraversalEngine,
    };
    pub use crate::ports::outbound::{
        DiagramRenderer, DiagramWriter, OutputPresenter, ProgressReporter, ReportFormatter,
        RepositoryReader,
    };
    pub use crate::shared::error::{ExitCode, VisualizerError};
    pub use crate::shared::Result;
}
