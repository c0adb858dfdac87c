use super::PackageName;
use serde::Serialize;
use std::fmt;

/// A directed dependency relation that a traversal actually walked
///
/// Ordering is lexicographic by (source, target), which is the order the
/// diagram source is emitted in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    source: PackageName,
    target: PackageName,
}

impl Edge {
    pub fn new(source: impl Into<PackageName>, target: impl Into<PackageName>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &PackageName {
        &self.source
    }

    pub fn target(&self) -> &PackageName {
        &self.target
    }

    /// Returns the same relation with its direction swapped
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
