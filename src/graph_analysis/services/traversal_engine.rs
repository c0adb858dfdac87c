use super::PackageFilter;
use crate::graph_analysis::domain::{
    CollectedEdges, DependencyGraph, Edge, LevelAdjacency, PackageName,
};
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// TraversalEngine service for depth-bounded, cycle-safe graph exploration
///
/// Works on either a forward or a reverse `DependencyGraph`. Both operations
/// allocate their visit state per call, so independent invocations never
/// share anything. Neighbors that are not keys of the graph are recorded
/// but never expanded.
pub struct TraversalEngine;

impl TraversalEngine {
    /// Breadth-first exploration that records each expanded package's
    /// filtered neighbor list
    ///
    /// Level `d` holds the packages first discovered `d` hops from `start`.
    /// Levels `0..=max_depth` are expanded; neighbors of the last level are
    /// listed in their parent's entry but get no entry of their own.
    /// Packages are marked visited when discovered, so each one is expanded
    /// at most once no matter how many parents reference it.
    ///
    /// Returns an empty result if `start` is not a key of `graph`.
    pub fn level_adjacency(
        graph: &DependencyGraph,
        start: &str,
        max_depth: usize,
        filter: &PackageFilter,
    ) -> LevelAdjacency {
        Self::level_adjacency_observed(graph, start, max_depth, filter, |_, _| {})
    }

    /// Same as `level_adjacency`, calling `on_level(depth, frontier_size)`
    /// before each level is expanded
    pub fn level_adjacency_observed(
        graph: &DependencyGraph,
        start: &str,
        max_depth: usize,
        filter: &PackageFilter,
        mut on_level: impl FnMut(usize, usize),
    ) -> LevelAdjacency {
        let mut result = LevelAdjacency::new();
        let Some(start) = graph.key(start) else {
            return result;
        };

        let mut visited: HashSet<&PackageName> = HashSet::from([start]);
        let mut frontier: Vec<&PackageName> = vec![start];
        let mut depth = 0;

        while !frontier.is_empty() && depth <= max_depth {
            on_level(depth, frontier.len());
            let mut next_frontier = Vec::new();

            for package in frontier {
                let Some(neighbors) = graph.dependencies(package.as_str()) else {
                    continue;
                };
                let accepted = filter.apply(neighbors);

                for &neighbor in &accepted {
                    if visited.insert(neighbor) {
                        next_frontier.push(neighbor);
                    }
                }

                result.record(
                    package.clone(),
                    depth,
                    accepted.into_iter().cloned().collect(),
                );
            }

            frontier = next_frontier;
            depth += 1;
        }

        result
    }

    /// Depth-first collection of every edge walked within `max_depth` hops
    ///
    /// The minimum depth of every package reachable within `max_depth` is
    /// settled first with a breadth-first pass. The depth-first walk then
    /// expands a package only when it is reached at that settled depth, is
    /// not already on the active path, and has not been expanded yet. The
    /// edges out of every package whose shortest filtered distance from
    /// `start` is at most `max_depth` end up in the set, independent of
    /// visiting order, and each package is expanded once.
    ///
    /// Returns an empty result if `start` is not a key of `graph`.
    pub fn collect_edges(
        graph: &DependencyGraph,
        start: &str,
        max_depth: usize,
        filter: &PackageFilter,
    ) -> CollectedEdges {
        let Some(start) = graph.key(start) else {
            return CollectedEdges::default();
        };

        let settled = SettledDepths::settle(graph, start, max_depth, filter);
        let mut expanded: HashSet<&PackageName> = HashSet::new();
        let mut active_path: HashSet<&PackageName> = HashSet::new();
        let mut edges = BTreeSet::new();
        let mut stack = vec![Step::Enter(start, 0)];

        while let Some(step) = stack.pop() {
            let (package, depth) = match step {
                Step::Leave(package) => {
                    active_path.remove(package);
                    continue;
                }
                Step::Enter(package, depth) => (package, depth),
            };

            if depth > max_depth || active_path.contains(package) {
                continue;
            }
            if settled.depth(package) != Some(depth) || !expanded.insert(package) {
                continue;
            }
            let Some(accepted) = settled.neighbors(package) else {
                continue;
            };

            for &neighbor in accepted {
                edges.insert(Edge::new(package.clone(), neighbor.clone()));
            }

            // Children run in neighbor order with `package` on the active
            // path, and it leaves the path once they have all finished.
            active_path.insert(package);
            stack.push(Step::Leave(package));
            for &neighbor in accepted.iter().rev() {
                stack.push(Step::Enter(neighbor, depth + 1));
            }
        }

        CollectedEdges::new(edges, settled.into_depths())
    }
}

enum Step<'g> {
    Enter(&'g PackageName, usize),
    Leave(&'g PackageName),
}

/// Minimum depths and filtered neighbor lists for one `collect_edges` call
struct SettledDepths<'g> {
    depths: HashMap<&'g PackageName, usize>,
    neighbors: HashMap<&'g PackageName, Vec<&'g PackageName>>,
}

impl<'g> SettledDepths<'g> {
    /// Breadth-first pass over levels `0..=max_depth`
    ///
    /// Packages discovered at a level beyond `max_depth` get no depth. The
    /// filter sees each expanded package's neighbors exactly once.
    fn settle(
        graph: &'g DependencyGraph,
        start: &'g PackageName,
        max_depth: usize,
        filter: &PackageFilter,
    ) -> Self {
        let mut depths = HashMap::from([(start, 0)]);
        let mut neighbors = HashMap::new();
        let mut frontier = vec![start];
        let mut depth = 0;

        while !frontier.is_empty() {
            let mut next_frontier = Vec::new();

            for package in frontier {
                let Some(dependencies) = graph.dependencies(package.as_str()) else {
                    continue;
                };
                let accepted = filter.apply(dependencies);
                if depth < max_depth {
                    for &neighbor in &accepted {
                        if let Entry::Vacant(slot) = depths.entry(neighbor) {
                            slot.insert(depth + 1);
                            next_frontier.push(neighbor);
                        }
                    }
                }
                neighbors.insert(package, accepted);
            }

            frontier = next_frontier;
            depth += 1;
        }

        Self { depths, neighbors }
    }

    fn depth(&self, package: &PackageName) -> Option<usize> {
        self.depths.get(package).copied()
    }

    fn neighbors(&self, package: &PackageName) -> Option<&[&'g PackageName]> {
        self.neighbors.get(package).map(Vec::as_slice)
    }

    fn into_depths(self) -> BTreeMap<PackageName, usize> {
        self.depths
            .into_iter()
            .map(|(package, depth)| (package.clone(), depth))
            .collect()
    }
}
