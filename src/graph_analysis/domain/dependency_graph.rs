use super::{Edge, PackageName};
use std::collections::HashMap;

/// DependencyGraph aggregate: an adjacency map that remembers insertion order
///
/// The same shape holds both the forward graph (package -> what it depends
/// on) and the reverse graph (package -> what depends on it). Package
/// iteration follows the order in which keys were first inserted; each
/// adjacency list keeps the order it was given in.
///
/// The graph does not enforce completeness by itself. `RepositoryModel`
/// guarantees that every referenced package is also a key, and the
/// traversal engine tolerates graphs where that does not hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    order: Vec<PackageName>,
    adjacency: HashMap<PackageName, Vec<PackageName>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the adjacency list of `package`, replacing any previous list
    ///
    /// A package inserted a second time keeps its first position.
    pub fn insert(&mut self, package: PackageName, dependencies: Vec<PackageName>) {
        *self.entry(package) = dependencies;
    }

    /// Ensures `package` is a key, adding it with an empty list if needed
    pub fn ensure_package(&mut self, package: &PackageName) {
        if !self.adjacency.contains_key(package) {
            self.entry(package.clone());
        }
    }

    /// Appends one neighbor to `package`, creating the key on demand
    pub fn push_dependency(&mut self, package: &PackageName, dependency: PackageName) {
        match self.adjacency.get_mut(package) {
            Some(dependencies) => dependencies.push(dependency),
            None => self.entry(package.clone()).push(dependency),
        }
    }

    fn entry(&mut self, package: PackageName) -> &mut Vec<PackageName> {
        if !self.adjacency.contains_key(&package) {
            self.order.push(package.clone());
        }
        self.adjacency.entry(package).or_default()
    }

    /// Returns the stored key equal to `package`
    pub fn key(&self, package: &str) -> Option<&PackageName> {
        self.adjacency.get_key_value(package).map(|(key, _)| key)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.adjacency.contains_key(package)
    }

    /// Returns the adjacency list of `package`, or `None` if it is not a key
    pub fn dependencies(&self, package: &str) -> Option<&[PackageName]> {
        self.adjacency.get(package).map(Vec::as_slice)
    }

    /// Iterates over `(package, adjacency list)` pairs in insertion order
    pub fn packages(&self) -> impl Iterator<Item = (&PackageName, &[PackageName])> {
        self.order.iter().map(move |name| {
            let dependencies = self
                .adjacency
                .get(name)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (name, dependencies)
        })
    }

    pub fn package_names(&self) -> impl Iterator<Item = &PackageName> {
        self.order.iter()
    }

    /// Iterates over every `(package, neighbor)` pair in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.packages().flat_map(|(package, dependencies)| {
            dependencies
                .iter()
                .map(move |dependency| Edge::new(package.clone(), dependency.clone()))
        })
    }

    pub fn package_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<N, D> FromIterator<(N, Vec<D>)> for DependencyGraph
where
    N: Into<PackageName>,
    D: Into<PackageName>,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<D>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (package, dependencies) in iter {
            graph.insert(
                package.into(),
                dependencies.into_iter().map(Into::into).collect(),
            );
        }
        graph
    }
}
