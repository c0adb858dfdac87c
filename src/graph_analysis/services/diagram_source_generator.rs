use crate::graph_analysis::domain::{DiagramSource, Edge};
use std::collections::BTreeSet;

/// DiagramSourceGenerator service producing deterministic diagram text
pub struct DiagramSourceGenerator;

impl DiagramSourceGenerator {
    /// Renders an edge set as `"<source> -> <target>"` lines sorted by
    /// (source, target)
    pub fn render<'a, I>(edges: I) -> DiagramSource
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut sorted: Vec<Edge> = edges.into_iter().cloned().collect();
        sorted.sort();
        sorted.dedup();
        DiagramSource::new(sorted)
    }

    /// Merges forward edges with edges collected over the reverse graph
    ///
    /// Reverse edges point from a package to its dependent; they are flipped
    /// so every edge in the result reads `dependent -> dependency`.
    pub fn merge_with_dependents(
        dependencies: &BTreeSet<Edge>,
        dependents: &BTreeSet<Edge>,
    ) -> BTreeSet<Edge> {
        dependencies
            .iter()
            .cloned()
            .chain(dependents.iter().map(Edge::reversed))
            .collect()
    }
}
