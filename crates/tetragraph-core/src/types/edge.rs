//! Parsed edge types.

use serde::{Deserialize, Serialize};

/// Kind of a parsed edge.
///
/// Undirected edges are expanded into both arcs when the graph is
/// assembled; the distinction only survives in the edge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Directed,
    Undirected,
}

impl EdgeKind {
    /// The label used in the edge table's `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }

    /// Parse a `type` column label back into an edge kind.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "directed" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            _ => None,
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed edge: (source, target, kind), endpoints already cleaned.
///
/// For directed kinds the pair is oriented source → target regardless
/// of which arrow notation produced it (`A -> B` and `B <- A` yield the
/// same edge).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl ParsedEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}
