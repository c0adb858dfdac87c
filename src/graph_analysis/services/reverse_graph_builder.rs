use crate::graph_analysis::domain::DependencyGraph;

/// ReverseGraphBuilder service deriving the dependents graph
pub struct ReverseGraphBuilder;

impl ReverseGraphBuilder {
    /// Builds the reverse adjacency map of `forward`
    ///
    /// Every forward package gets a key, in forward order. For each forward
    /// edge `p -> d`, `p` is appended to the entry of `d`, following forward
    /// package order and then each package's dependency order. A `d` that is
    /// not a forward key is added on demand.
    pub fn build(forward: &DependencyGraph) -> DependencyGraph {
        let mut reverse = DependencyGraph::new();

        for package in forward.package_names() {
            reverse.ensure_package(package);
        }

        for (package, dependencies) in forward.packages() {
            for dependency in dependencies {
                reverse.push_dependency(dependency, package.clone());
            }
        }

        reverse
    }
}
