//! Centrality engine: degree, betweenness, and eigenvector centrality
//! over the assembled graph, plus the ranked hub table.
//!
//! Betweenness and eigenvector run on the undirected symmetrization by
//! default; `CentralityConfig` can switch them to the directed graph.
//! Degree is always the underlying-undirected degree, since undirected
//! inputs were already expanded to arc pairs.
//!
//! A metric that cannot be computed degrades to the undefined sentinel
//! for every node, never a fatal error.

pub mod betweenness;
pub mod degree;
pub mod eigenvector;
pub mod ranking;

use tetragraph_core::config::CentralityConfig;
use tetragraph_core::types::CentralityTable;
use tracing::warn;

use crate::graph::CausalGraph;

pub use betweenness::betweenness;
pub use degree::degrees;
pub use eigenvector::eigenvector;
pub use ranking::build_ranking;

/// Compute all centrality metrics and assemble the ranking table.
pub fn compute_centrality(graph: &CausalGraph, config: &CentralityConfig) -> CentralityTable {
    let directed = config.effective_directed();

    let degree = degrees(graph);
    let betweenness = betweenness(graph, directed);
    let eigenvector = match eigenvector(
        graph,
        directed,
        config.effective_max_iterations(),
        config.effective_tolerance(),
    ) {
        Ok(values) => Some(values),
        Err(e) => {
            warn!(error = %e, "eigenvector centrality degraded to undefined");
            None
        }
    };

    build_ranking(graph, &degree, &betweenness, eigenvector.as_deref())
}
