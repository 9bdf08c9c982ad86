//! Centrality engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the centrality engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CentralityConfig {
    /// Treat the assembled graph as directed for betweenness and
    /// eigenvector centrality. Default false: metrics run on the
    /// undirected symmetrization. Degree is always the
    /// underlying-undirected degree.
    pub directed: Option<bool>,

    /// Maximum power-iteration steps for eigenvector centrality.
    pub max_iterations: Option<usize>,

    /// Convergence tolerance for eigenvector centrality (per-node
    /// average L1 change between iterations).
    pub tolerance: Option<f64>,
}

impl CentralityConfig {
    pub fn effective_directed(&self) -> bool {
        self.directed.unwrap_or(false)
    }

    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations.unwrap_or(1000)
    }

    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(1e-6)
    }
}
