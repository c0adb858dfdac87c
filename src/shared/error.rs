use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a missing start package apart from other failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including runs where only the diagram source could be produced
    Success = 0,
    /// The requested start package does not exist in the repository
    UnknownPackage = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable repository, schema error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error that aborted the run
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<VisualizerError>() {
            Some(VisualizerError::UnknownStartPackage { .. }) => ExitCode::UnknownPackage,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UnknownPackage => write!(f, "Unknown Package (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph visualization.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("Malformed repository entry for package '{package}'\nDetails: {details}\n\n💡 Hint: Each package must map to an object whose 'dependencies' field is a list of package names")]
    SchemaError { package: String, details: String },

    #[error("Package '{package}' was not found in the repository\n\n💡 Hint: {suggestion}")]
    UnknownStartPackage { package: String, suggestion: String },

    #[error("Repository description not found: {path}\n\n💡 Hint: Pass the path of a repository file with --repo-url")]
    RepositoryNotFound { path: PathBuf },

    #[error("Failed to parse repository description: {path}\nDetails: {details}\n\n💡 Hint: Supported formats are JSON, TOML and YAML")]
    RepositoryParseError { path: PathBuf, details: String },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular repository description file")]
    InvalidRepositoryPath { path: PathBuf, reason: String },

    #[error("Repository mode '{mode}' is not supported\n\n💡 Hint: Use --repo-mode test with a local repository description file")]
    UnsupportedRepoMode { mode: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Diagram renderer '{tool}' failed ({status})\n{stderr}\n\n💡 Hint: Install Graphviz or pass --renderer with the path of the 'dot' executable")]
    RenderFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
