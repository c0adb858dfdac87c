use super::{Edge, PackageName};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Per-package neighbor lists recorded by a breadth-first traversal
///
/// Entries appear in the order packages were expanded, so the start
/// package always comes first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelAdjacency {
    entries: Vec<LevelEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelEntry {
    pub package: PackageName,
    pub depth: usize,
    pub neighbors: Vec<PackageName>,
}

impl LevelAdjacency {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, package: PackageName, depth: usize, neighbors: Vec<PackageName>) {
        self.entries.push(LevelEntry {
            package,
            depth,
            neighbors,
        });
    }

    pub fn entries(&self) -> &[LevelEntry] {
        &self.entries
    }

    /// Returns the recorded neighbor list for `package`
    pub fn neighbors(&self, package: &str) -> Option<&[PackageName]> {
        self.entries
            .iter()
            .find(|entry| entry.package.as_str() == package)
            .map(|entry| entry.neighbors.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deepest level that produced an entry
    pub fn max_depth_reached(&self) -> Option<usize> {
        self.entries.iter().map(|entry| entry.depth).max()
    }

    /// Returns the result as `(package, neighbors)` string pairs in expansion order
    pub fn to_pairs(&self) -> Vec<(&str, Vec<&str>)> {
        self.entries
            .iter()
            .map(|entry| {
                (
                    entry.package.as_str(),
                    entry.neighbors.iter().map(PackageName::as_str).collect(),
                )
            })
            .collect()
    }
}

/// Edge set gathered by the depth-first edge collection
///
/// Alongside the edges it keeps the minimum depth at which every touched
/// package was discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedEdges {
    edges: BTreeSet<Edge>,
    discovered: BTreeMap<PackageName, usize>,
}

impl CollectedEdges {
    pub(crate) fn new(edges: BTreeSet<Edge>, discovered: BTreeMap<PackageName, usize>) -> Self {
        Self { edges, discovered }
    }

    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn into_edges(self) -> BTreeSet<Edge> {
        self.edges
    }

    /// Minimum depth at which `package` was discovered, if it was reached at all
    pub fn discovered_depth(&self, package: &str) -> Option<usize> {
        self.discovered.get(package).copied()
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
