mod cli;

use cli::{Args, RepoMode};
use dep_visualizer::adapters::outbound::console::StderrProgressReporter;
use dep_visualizer::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use dep_visualizer::adapters::outbound::renderer::GraphvizRenderer;
use dep_visualizer::application::dto::{VisualizationRequest, DEFAULT_RENDERER};
use dep_visualizer::application::factories::FormatterFactory;
use dep_visualizer::application::use_cases::VisualizeDependenciesUseCase;
use dep_visualizer::config::{self, ConfigFile};
use dep_visualizer::ports::outbound::OutputPresenter;
use dep_visualizer::shared::error::{ExitCode, VisualizerError};
use dep_visualizer::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments; clap exits with code 2 on invalid input
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;

    if args.repo_mode != RepoMode::Test {
        return Err(VisualizerError::UnsupportedRepoMode {
            mode: args.repo_mode.to_string(),
        }
        .into());
    }

    // Merge CLI arguments over config file values
    let mut builder = VisualizationRequest::builder()
        .repository_path(&args.repo_url)
        .package(&args.package)
        .output_path(&args.output_file)
        .include_dependents(args.reverse_override().or(config.reverse).unwrap_or(false))
        .skip_render(args.no_render);
    if let Some(max_depth) = args.max_depth.or(config.max_depth) {
        builder = builder.max_depth(max_depth);
    }
    if let Some(filter) = args.filter.clone().or_else(|| config.filter.clone()) {
        builder = builder.filter(filter);
    }
    if let Some(format) = args.image_format.or_else(|| config.image_format()) {
        builder = builder.image_format(format);
    }
    let request = builder.build()?;

    let renderer = args
        .renderer
        .clone()
        .or_else(|| config.renderer.clone())
        .unwrap_or_else(|| DEFAULT_RENDERER.to_string());

    // Create adapters (Dependency Injection)
    let use_case = VisualizeDependenciesUseCase::new(
        FileSystemReader::new(),
        FileSystemWriter::new(),
        GraphvizRenderer::new(renderer),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(request)?;

    let report_format = args
        .report_format
        .or_else(|| config.report_format())
        .unwrap_or_default();
    eprintln!("{}", FormatterFactory::progress_message(report_format));

    let report = FormatterFactory::create(report_format).format(&response)?;
    StdoutPresenter::new().present(&report)?;

    Ok(())
}

/// Loads the config file given on the command line, or discovers one in the
/// current directory
fn load_config(explicit: Option<&str>) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => {
            eprintln!("📋 Using config file: {}", path);
            Some(config::load_config_from_path(Path::new(path))?)
        }
        None => {
            let current_dir = std::env::current_dir()?;
            let discovered = config::discover_config(&current_dir)?;
            if discovered.is_some() {
                eprintln!("📋 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            discovered
        }
    };
    Ok(config.unwrap_or_default())
}
