use clap::{Parser, ValueEnum};

use dep_visualizer::application::dto::{ImageFormat, ReportFormat};

/// Where the repository description comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepoMode {
    /// Local repository description file
    Test,
    /// Remote package index (not supported)
    Remote,
}

impl std::fmt::Display for RepoMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoMode::Test => write!(f, "test"),
            RepoMode::Remote => write!(f, "remote"),
        }
    }
}

/// Visualize the dependency graph of a package
#[derive(Parser, Debug)]
#[command(name = "dep-visualizer")]
#[command(version = "0.1.0")]
#[command(
    about = "Explore a package's dependencies in a repository description and render them with Graphviz",
    long_about = None
)]
pub struct Args {
    /// Package to start the traversal from
    #[arg(short, long)]
    pub package: String,

    /// Path of the repository description file (JSON, TOML or YAML)
    #[arg(short = 'r', long = "repo-url", value_name = "PATH")]
    pub repo_url: String,

    /// Repository mode
    #[arg(long = "repo-mode", value_enum, default_value_t = RepoMode::Test)]
    pub repo_mode: RepoMode,

    /// Output image path; the diagram source is written next to it with a .dot extension
    #[arg(short, long = "output-file", default_value = "graph.png")]
    pub output_file: String,

    /// Maximum number of hops from the start package [default: 3]
    #[arg(short = 'd', long = "max-depth")]
    pub max_depth: Option<usize>,

    /// Leave out packages whose name contains this substring
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Also explore the packages that depend on the start package
    #[arg(long, overrides_with = "no_reverse")]
    pub reverse: bool,

    /// Do not explore dependents, even if the config file enables it
    #[arg(long = "no-reverse", overrides_with = "reverse")]
    pub no_reverse: bool,

    /// Only write the diagram source, do not invoke the renderer
    #[arg(long = "no-render")]
    pub no_render: bool,

    /// Image format: png, svg or pdf (defaults to the output file extension)
    #[arg(long = "image-format")]
    pub image_format: Option<ImageFormat>,

    /// Report format written to stdout: text or json
    #[arg(long = "report-format")]
    pub report_format: Option<ReportFormat>,

    /// Graphviz executable used for rendering [default: dot]
    #[arg(long, value_name = "EXECUTABLE")]
    pub renderer: Option<String>,

    /// Path to a config file (defaults to dep-visualizer.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Dependents setting given on the command line, if any
    ///
    /// The flag given last wins when both `--reverse` and `--no-reverse` appear.
    pub fn reverse_override(&self) -> Option<bool> {
        if self.reverse {
            Some(true)
        } else if self.no_reverse {
            Some(false)
        } else {
            None
        }
    }
}
