/// Console adapters for operator feedback
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
