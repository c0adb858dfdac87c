pub mod dependency_graph;
pub mod diagram_source;
pub mod edge;
pub mod package;
pub mod raw_repository;
pub mod traversal_result;

pub use dependency_graph::DependencyGraph;
pub use diagram_source::DiagramSource;
pub use edge::Edge;
pub use package::PackageName;
pub use raw_repository::RawRepository;
pub use traversal_result::{CollectedEdges, LevelAdjacency, LevelEntry};
