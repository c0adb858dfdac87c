mod diagram_source_generator;
mod package_filter;
mod repository_model;
mod reverse_graph_builder;
mod traversal_engine;

pub use diagram_source_generator::DiagramSourceGenerator;
pub use package_filter::PackageFilter;
pub use repository_model::RepositoryModel;
pub use reverse_graph_builder::ReverseGraphBuilder;
pub use traversal_engine::TraversalEngine;
