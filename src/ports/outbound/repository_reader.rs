use crate::graph_analysis::domain::RawRepository;
use crate::shared::Result;
use std::path::Path;

/// RepositoryReader port for loading a repository description
///
/// Implementations decode the description into a `RawRepository`; schema
/// checks on the package entries are left to the domain.
pub trait RepositoryReader {
    /// Reads and decodes the repository description at `location`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The description does not exist or cannot be read
    /// - The content is not a mapping from package names to entries
    fn read_repository(&self, location: &Path) -> Result<RawRepository>;
}
