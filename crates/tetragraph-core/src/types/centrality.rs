//! Centrality ranking types.

use serde::{Deserialize, Serialize};

/// One row of the centrality ranking table.
///
/// `degree` is integer-valued for unweighted runs but stored as `f64`
/// so the weighted-degree variant shares the type. `eigenvector` is
/// `None` when the metric degraded (non-convergence, ill-defined
/// spectrum) and serializes as an empty field, never a fatal error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityRow {
    pub node: String,
    pub degree: f64,
    pub betweenness: f64,
    pub eigenvector: Option<f64>,
}

/// Ranking table: one row per graph node, stable-sorted by degree
/// descending. Ties keep node-set (lexicographic first-seen) order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CentralityTable {
    rows: Vec<CentralityRow>,
}

impl CentralityTable {
    pub fn new(rows: Vec<CentralityRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CentralityRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows (top hubs by degree).
    pub fn top_n(&self, n: usize) -> &[CentralityRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Node identifiers in ranking order.
    pub fn ranked_nodes(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.node.as_str())
    }
}
