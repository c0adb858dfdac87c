use crate::application::dto::{RenderStatus, VisualizationRequest, VisualizationResponse};
use crate::graph_analysis::domain::{DependencyGraph, LevelAdjacency, PackageName};
use crate::graph_analysis::services::{
    DiagramSourceGenerator, PackageFilter, RepositoryModel, ReverseGraphBuilder, TraversalEngine,
};
use crate::ports::outbound::{DiagramRenderer, DiagramWriter, ProgressReporter, RepositoryReader};
use crate::shared::error::VisualizerError;
use crate::shared::Result;

/// Maximum number of similar package names offered for an unknown start package
const MAX_SUGGESTIONS: usize = 3;

/// VisualizeDependenciesUseCase - Core use case for dependency visualization
///
/// Loads the repository, explores the dependency (and optionally dependent)
/// subgraph of the start package, writes the diagram source and hands it to
/// the renderer.
///
/// # Type Parameters
/// * `RR` - RepositoryReader implementation
/// * `DW` - DiagramWriter implementation
/// * `DR` - DiagramRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct VisualizeDependenciesUseCase<RR, DW, DR, PR> {
    repository_reader: RR,
    diagram_writer: DW,
    diagram_renderer: DR,
    progress_reporter: PR,
}

impl<RR, DW, DR, PR> VisualizeDependenciesUseCase<RR, DW, DR, PR>
where
    RR: RepositoryReader,
    DW: DiagramWriter,
    DR: DiagramRenderer,
    PR: ProgressReporter,
{
    /// Creates a new VisualizeDependenciesUseCase with injected dependencies
    pub fn new(
        repository_reader: RR,
        diagram_writer: DW,
        diagram_renderer: DR,
        progress_reporter: PR,
    ) -> Self {
        Self {
            repository_reader,
            diagram_writer,
            diagram_renderer,
            progress_reporter,
        }
    }

    /// Executes the visualization use case
    ///
    /// # Errors
    /// Returns an error if the repository cannot be loaded or is malformed,
    /// if the start package does not exist, or if the diagram source cannot
    /// be written. A renderer failure is not an error: it is recorded as
    /// `RenderStatus::Failed` in the response.
    pub fn execute(&self, request: VisualizationRequest) -> Result<VisualizationResponse> {
        // Step 1: Load and normalize the repository
        self.progress_reporter.report(&format!(
            "📖 Loading repository from: {}",
            request.repository_path.display()
        ));
        let raw = self
            .repository_reader
            .read_repository(&request.repository_path)?;
        let forward = RepositoryModel::normalize(raw)?;
        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s) and {} dependency relation(s)",
            forward.package_count(),
            forward.edge_count()
        ));

        // Step 2: The start package must exist
        if !forward.contains(&request.package) {
            return Err(VisualizerError::UnknownStartPackage {
                package: request.package.clone(),
                suggestion: suggest_packages(&forward, &request.package),
            }
            .into());
        }

        // Step 3: Explore dependencies
        let filter = PackageFilter::new(request.filter.as_str());
        self.progress_reporter.report(&format!(
            "🔍 Exploring dependencies of '{}' (max depth {})...",
            request.package, request.max_depth
        ));
        let dependencies = self.explore_levels(&forward, &request, &filter);
        let mut edges =
            TraversalEngine::collect_edges(&forward, &request.package, request.max_depth, &filter)
                .into_edges();

        // Step 4: Explore dependents if requested
        let dependents = if request.include_dependents {
            self.progress_reporter
                .report(&format!("🔁 Exploring dependents of '{}'...", request.package));
            let reverse = ReverseGraphBuilder::build(&forward);
            let adjacency = self.explore_levels(&reverse, &request, &filter);
            let reverse_edges = TraversalEngine::collect_edges(
                &reverse,
                &request.package,
                request.max_depth,
                &filter,
            );
            edges = DiagramSourceGenerator::merge_with_dependents(&edges, reverse_edges.edges());
            Some(adjacency)
        } else {
            None
        };

        if filter.is_unmatched() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter '{}' did not exclude any package.",
                filter.substring()
            ));
        }

        // Step 5: Write the diagram source
        let diagram = DiagramSourceGenerator::render(&edges);
        let diagram_source_path = request.diagram_source_path();
        let root = PackageName::new(request.package.as_str());
        self.diagram_writer
            .write_diagram(&diagram_source_path, &diagram.to_dot(&root))?;
        self.progress_reporter.report(&format!(
            "📝 Wrote {} edge(s) to {}",
            diagram.edges().len(),
            diagram_source_path.display()
        ));

        // Step 6: Render the image, falling back to the source file on failure
        let render_status = self.render(&request);

        self.progress_reporter
            .report_completion("✅ Dependency graph generated");

        Ok(VisualizationResponse {
            package: root,
            max_depth: request.max_depth,
            filter: request.filter.clone(),
            dependencies,
            dependents,
            diagram,
            diagram_source_path,
            image_path: request.output_path.clone(),
            render_status,
        })
    }

    /// Runs the breadth-first exploration, reporting one step per level
    fn explore_levels(
        &self,
        graph: &DependencyGraph,
        request: &VisualizationRequest,
        filter: &PackageFilter,
    ) -> LevelAdjacency {
        let total_levels = request.max_depth.saturating_add(1);
        TraversalEngine::level_adjacency_observed(
            graph,
            &request.package,
            request.max_depth,
            filter,
            |depth, frontier| {
                self.progress_reporter.report_progress(
                    depth + 1,
                    total_levels,
                    Some(&format!("level {}: {} package(s)", depth, frontier)),
                );
            },
        )
    }

    fn render(&self, request: &VisualizationRequest) -> RenderStatus {
        if !request.should_render() {
            return RenderStatus::Skipped;
        }

        self.progress_reporter.report(&format!(
            "🎨 Rendering {} image to {}...",
            request.image_format,
            request.output_path.display()
        ));
        match self.diagram_renderer.render(
            &request.diagram_source_path(),
            &request.output_path,
            request.image_format,
        ) {
            Ok(()) => RenderStatus::Rendered,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Rendering failed, keeping diagram source at {}\n{}",
                    request.diagram_source_path().display(),
                    e
                ));
                RenderStatus::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Builds the hint shown when the start package does not exist
fn suggest_packages(graph: &DependencyGraph, requested: &str) -> String {
    let needle = requested.to_lowercase();
    let similar: Vec<&str> = graph
        .package_names()
        .map(PackageName::as_str)
        .filter(|name| {
            let name = name.to_lowercase();
            name.contains(&needle) || needle.contains(&name)
        })
        .take(MAX_SUGGESTIONS)
        .collect();

    if similar.is_empty() {
        format!(
            "The repository defines {} package(s). Package names are case-sensitive.",
            graph.package_count()
        )
    } else {
        format!("Did you mean: {}?", similar.join(", "))
    }
}
