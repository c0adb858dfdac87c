/// Integration tests for the application layer
mod test_utilities;

use dep_visualizer::prelude::*;
use std::path::PathBuf;
use test_utilities::mocks::*;

const DIAMOND_REPOSITORY: &str = r#"{
    "app": {"dependencies": ["web", "db"]},
    "web": {"dependencies": ["http"]},
    "db": {"dependencies": ["http", "db-test-utils"]},
    "http": {"dependencies": []},
    "db-test-utils": {"dependencies": ["http"]}
}"#;

fn request(package: &str, max_depth: usize) -> VisualizationRequest {
    VisualizationRequest::builder()
        .repository_path("repository.json")
        .package(package)
        .max_depth(max_depth)
        .output_path("out/graph.svg")
        .build()
        .unwrap()
}

fn use_case(
    repository: &str,
) -> (
    VisualizeDependenciesUseCase<
        MockRepositoryReader,
        MockDiagramWriter,
        MockDiagramRenderer,
        MockProgressReporter,
    >,
    MockDiagramWriter,
    MockDiagramRenderer,
    MockProgressReporter,
) {
    let writer = MockDiagramWriter::new();
    let renderer = MockDiagramRenderer::new();
    let reporter = MockProgressReporter::new();
    let use_case = VisualizeDependenciesUseCase::new(
        MockRepositoryReader::new(repository),
        writer.clone(),
        renderer.clone(),
        reporter.clone(),
    );
    (use_case, writer, renderer, reporter)
}

#[test]
fn test_visualize_happy_path() {
    let (use_case, writer, renderer, reporter) =
        use_case(r#"{"A": {"dependencies": ["B", "C"]}, "B": {"dependencies": ["C"]}, "C": {"dependencies": []}}"#);

    let response = use_case.execute(request("A", 2)).unwrap();

    assert_eq!(
        response.dependencies.to_pairs(),
        vec![("A", vec!["B", "C"]), ("B", vec!["C"]), ("C", vec![])]
    );
    assert_eq!(response.diagram.lines(), ["A -> B", "A -> C", "B -> C"]);
    assert!(response.dependents.is_none());
    assert_eq!(response.render_status, RenderStatus::Rendered);
    assert_eq!(response.diagram_source_path, PathBuf::from("out/graph.dot"));

    let written = writer.written();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].0, PathBuf::from("out/graph.dot"));
    assert!(written[0].1.contains("    \"A\" -> \"B\";\n"));
    assert!(written[0].1.contains("    \"B\" -> \"C\";\n"));

    let calls = renderer.calls();
    assert_eq!(
        calls,
        vec![(
            PathBuf::from("out/graph.dot"),
            PathBuf::from("out/graph.svg"),
            ImageFormat::Svg
        )]
    );

    let messages = reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("Detected 3 package(s) and 3 dependency relation(s)")));
    assert!(messages.iter().any(|m| m == "Progress: 1/3 - level 0: 1 package(s)"));
    assert!(messages
        .iter()
        .any(|m| m == "Completed: ✅ Dependency graph generated"));
}

#[test]
fn test_visualize_cycle_terminates() {
    let (use_case, _, _, _) =
        use_case(r#"{"A": {"dependencies": ["B"]}, "B": {"dependencies": ["A"]}}"#);

    let response = use_case.execute(request("A", 5)).unwrap();
    assert_eq!(response.diagram.lines(), ["A -> B", "B -> A"]);
}

#[test]
fn test_visualize_with_filter() {
    let (use_case, _, _, reporter) = use_case(DIAMOND_REPOSITORY);
    let request = VisualizationRequest::builder()
        .repository_path("repository.json")
        .package("app")
        .filter("test")
        .output_path("graph.png")
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(
        response.diagram.lines(),
        ["app -> db", "app -> web", "db -> http", "web -> http"]
    );
    assert!(response
        .dependencies
        .entries()
        .iter()
        .all(|entry| entry.neighbors.iter().all(|n| !n.contains("test"))));
    assert!(!reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("did not exclude any package")));
}

#[test]
fn test_visualize_filter_without_matches_warns() {
    let (use_case, _, _, reporter) = use_case(DIAMOND_REPOSITORY);
    let request = VisualizationRequest::builder()
        .repository_path("repository.json")
        .package("app")
        .filter("nothing-matches")
        .output_path("graph.png")
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.diagram.lines().len(), 6);
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error: ") && m.contains("did not exclude any package")));
}

#[test]
fn test_visualize_depth_zero_expands_only_start() {
    let (use_case, writer, _, _) = use_case(DIAMOND_REPOSITORY);

    let response = use_case.execute(request("app", 0)).unwrap();

    assert_eq!(response.diagram.lines(), ["app -> db", "app -> web"]);
    assert_eq!(response.dependencies.to_pairs(), vec![("app", vec!["web", "db"])]);
    assert!(writer.written()[0].1.contains("\"app\" [style=filled"));
}

#[test]
fn test_visualize_leaf_package_keeps_start_node() {
    let (use_case, writer, _, _) = use_case(DIAMOND_REPOSITORY);

    let response = use_case.execute(request("http", 3)).unwrap();

    assert!(response.diagram.is_empty());
    assert_eq!(response.dependencies.to_pairs(), vec![("http", vec![])]);
    // The start package is still declared in the diagram source
    assert!(writer.written()[0].1.contains("\"http\" [style=filled"));
}

#[test]
fn test_visualize_with_dependents() {
    let (use_case, _, _, reporter) = use_case(DIAMOND_REPOSITORY);
    let request = VisualizationRequest::builder()
        .repository_path("repository.json")
        .package("http")
        .max_depth(0)
        .include_dependents(true)
        .output_path("graph.png")
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    let dependents = response.dependents.unwrap();
    assert_eq!(
        dependents.to_pairs(),
        vec![("http", vec!["web", "db", "db-test-utils"])]
    );
    assert_eq!(response.dependencies.to_pairs(), vec![("http", vec![])]);
    // Dependent edges keep the "depends on" direction
    assert_eq!(
        response.diagram.lines(),
        ["db -> http", "db-test-utils -> http", "web -> http"]
    );
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Exploring dependents of 'http'")));
}

#[test]
fn test_visualize_unknown_package() {
    let (use_case, writer, renderer, _) = use_case(DIAMOND_REPOSITORY);

    let err = use_case.execute(request("App", 2)).unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::UnknownPackage);
    let message = err.to_string();
    assert!(message.contains("Package 'App' was not found"));
    assert!(message.contains("Did you mean: app?"));
    assert!(writer.written().is_empty());
    assert!(renderer.calls().is_empty());
}

#[test]
fn test_visualize_schema_error_aborts_before_traversal() {
    let (use_case, writer, _, _) =
        use_case(r#"{"A": {"dependencies": "B"}, "B": {"dependencies": []}}"#);

    let err = use_case.execute(request("A", 2)).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<VisualizerError>(),
        Some(VisualizerError::SchemaError { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
    assert!(writer.written().is_empty());
}

#[test]
fn test_visualize_reader_failure() {
    let use_case = VisualizeDependenciesUseCase::new(
        MockRepositoryReader::with_failure(),
        MockDiagramWriter::new(),
        MockDiagramRenderer::new(),
        MockProgressReporter::new(),
    );

    let err = use_case.execute(request("A", 2)).unwrap_err();
    assert!(err.to_string().contains("Repository description not found"));
}

#[test]
fn test_visualize_write_failure_is_error() {
    let renderer = MockDiagramRenderer::new();
    let use_case = VisualizeDependenciesUseCase::new(
        MockRepositoryReader::new(DIAMOND_REPOSITORY),
        MockDiagramWriter::with_failure(),
        renderer.clone(),
        MockProgressReporter::new(),
    );

    let err = use_case.execute(request("app", 2)).unwrap_err();
    assert!(err.to_string().contains("Failed to write to file"));
    assert!(renderer.calls().is_empty());
}

#[test]
fn test_visualize_render_failure_is_degraded_mode() {
    let writer = MockDiagramWriter::new();
    let reporter = MockProgressReporter::new();
    let use_case = VisualizeDependenciesUseCase::new(
        MockRepositoryReader::new(DIAMOND_REPOSITORY),
        writer.clone(),
        MockDiagramRenderer::with_failure(),
        reporter.clone(),
    );

    let response = use_case.execute(request("app", 2)).unwrap();

    assert!(response.render_status.is_failed());
    assert_eq!(writer.written().len(), 1);
    let messages = reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("Rendering failed, keeping diagram source at out/graph.dot")));
    assert!(messages.iter().any(|m| m.contains("syntax error in line 1")));
}

#[test]
fn test_visualize_skip_render() {
    let (use_case, writer, renderer, _) = use_case(DIAMOND_REPOSITORY);
    let request = VisualizationRequest::builder()
        .repository_path("repository.json")
        .package("app")
        .output_path("graph.png")
        .skip_render(true)
        .build()
        .unwrap();

    let response = use_case.execute(request).unwrap();

    assert_eq!(response.render_status, RenderStatus::Skipped);
    assert_eq!(writer.written().len(), 1);
    assert!(renderer.calls().is_empty());
}

#[test]
fn test_visualize_is_deterministic() {
    let (first, _, _, _) = use_case(DIAMOND_REPOSITORY);
    let (second, _, _, _) = use_case(DIAMOND_REPOSITORY);

    let a = first.execute(request("app", 3)).unwrap();
    let b = second.execute(request("app", 3)).unwrap();

    assert_eq!(a.diagram, b.diagram);
    assert_eq!(a.dependencies, b.dependencies);
}

#[test]
fn test_report_formatters_on_use_case_output() {
    let (use_case, _, _, _) = use_case(DIAMOND_REPOSITORY);
    let response = use_case.execute(request("web", 1)).unwrap();

    let text = TextReportFormatter::new().format(&response).unwrap();
    assert!(text.contains("[0] web -> http"));
    assert!(text.contains("  web -> http\n"));

    let json = JsonReportFormatter::new().format(&response).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["edges"], serde_json::json!(["web -> http"]));
    assert_eq!(value["artifacts"]["image"], "out/graph.svg");
}
