//! Edge-notation rules: an ordered marker table scanned top-down.
//!
//! Two notation dialects are supported: the three-character export
//! form (`-->`, `<--`, `---`) and the plain form (`->`, `<-`, `-`).
//! Longer markers sit above their two-character prefixes so that
//! `A --> B` never splits on the bare `->`. First match wins; adding a
//! new notation means adding a row, not touching the scan.

use tetragraph_core::types::EdgeKind;

/// How a marker orients the endpoints around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left side is the source: `A -> B` gives (A, B).
    Forward,
    /// Right side is the source: `A <- B` gives (B, A).
    Reverse,
    /// No direction; expanded to both arcs at assembly.
    Undirected,
}

/// One row of the notation table.
#[derive(Debug, Clone, Copy)]
pub struct EdgeRule {
    pub marker: &'static str,
    pub orientation: Orientation,
}

/// The notation table, in priority order.
pub const EDGE_RULES: &[EdgeRule] = &[
    EdgeRule { marker: "-->", orientation: Orientation::Forward },
    EdgeRule { marker: "<--", orientation: Orientation::Reverse },
    EdgeRule { marker: "---", orientation: Orientation::Undirected },
    EdgeRule { marker: "->", orientation: Orientation::Forward },
    EdgeRule { marker: "<-", orientation: Orientation::Reverse },
    EdgeRule { marker: "-", orientation: Orientation::Undirected },
];

/// Classify a line against the notation table.
///
/// Returns the raw (source, target, kind) halves split once on the
/// first occurrence of the winning marker, or `None` when no marker
/// matches. Endpoint cleanup is the caller's job.
pub fn classify(line: &str) -> Option<(&str, &str, EdgeKind)> {
    for rule in EDGE_RULES {
        if let Some((left, right)) = line.split_once(rule.marker) {
            return Some(match rule.orientation {
                Orientation::Forward => (left, right, EdgeKind::Directed),
                Orientation::Reverse => (right, left, EdgeKind::Directed),
                Orientation::Undirected => (left, right, EdgeKind::Undirected),
            });
        }
    }
    None
}
