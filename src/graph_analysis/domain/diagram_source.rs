use super::{Edge, PackageName};

/// Deterministic textual description of an edge set
///
/// Holds the edges sorted by (source, target) together with one
/// `"<source> -> <target>"` line per edge. `to_dot` wraps the same edges in a
/// Graphviz document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramSource {
    edges: Vec<Edge>,
    lines: Vec<String>,
}

impl DiagramSource {
    pub(crate) fn new(edges: Vec<Edge>) -> Self {
        let lines = edges.iter().map(Edge::to_string).collect();
        Self { edges, lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Renders a Graphviz `digraph` document
    ///
    /// `root` is declared first with a highlighted style so a package with no
    /// accepted dependencies still shows up in the image.
    pub fn to_dot(&self, root: &PackageName) -> String {
        let mut dot = String::from("digraph dependencies {\n");
        dot.push_str("    rankdir=LR;\n");
        dot.push_str("    node [shape=box, fontname=\"Helvetica\"];\n");
        dot.push_str(&format!(
            "    {} [style=filled, fillcolor=\"#d9e8fb\"];\n",
            quote(root.as_str())
        ));
        for edge in &self.edges {
            dot.push_str(&format!(
                "    {} -> {};\n",
                quote(edge.source().as_str()),
                quote(edge.target().as_str())
            ));
        }
        dot.push_str("}\n");
        dot
    }
}

/// Quotes an identifier for DOT, escaping backslashes and double quotes
fn quote(identifier: &str) -> String {
    let mut quoted = String::with_capacity(identifier.len() + 2);
    quoted.push('"');
    for c in identifier.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
