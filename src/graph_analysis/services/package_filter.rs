use crate::graph_analysis::domain::PackageName;
use std::cell::Cell;

/// PackageFilter - Excludes packages whose name contains a substring
///
/// An empty substring accepts every package. Matching is case-sensitive.
/// The filter counts how many candidates it rejected so callers can warn
/// when a non-empty filter had no effect.
#[derive(Debug, Default)]
pub struct PackageFilter {
    substring: String,
    excluded: Cell<usize>,
}

impl PackageFilter {
    pub fn new(substring: impl Into<String>) -> Self {
        Self {
            substring: substring.into(),
            excluded: Cell::new(0),
        }
    }

    /// A filter that accepts everything
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn substring(&self) -> &str {
        &self.substring
    }

    pub fn is_active(&self) -> bool {
        !self.substring.is_empty()
    }

    /// Returns true if `package` survives the filter
    pub fn accepts(&self, package: &PackageName) -> bool {
        if self.is_active() && package.contains(&self.substring) {
            self.excluded.set(self.excluded.get() + 1);
            return false;
        }
        true
    }

    /// Returns the accepted subset of `candidates`, preserving order
    pub fn apply<'a>(&self, candidates: &'a [PackageName]) -> Vec<&'a PackageName> {
        candidates
            .iter()
            .filter(|candidate| self.accepts(candidate))
            .collect()
    }

    /// Number of candidates rejected so far
    pub fn excluded_count(&self) -> usize {
        self.excluded.get()
    }

    /// True if the filter is active but never rejected anything
    pub fn is_unmatched(&self) -> bool {
        self.is_active() && self.excluded.get() == 0
    }
}
