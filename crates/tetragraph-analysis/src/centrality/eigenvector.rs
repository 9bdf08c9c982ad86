//! Eigenvector centrality via power iteration.

use tetragraph_core::errors::CentralityError;

use crate::graph::CausalGraph;

use super::betweenness::neighbor_lists;

/// Eigenvector centrality per node, in canonical node order.
///
/// Power iteration on `A + I`; the shift keeps bipartite graphs
/// (stars, trees) from oscillating between the ±λ eigenpair while
/// leaving the eigenvectors of `A` unchanged. The adjacency is
/// symmetrized unless `directed`; in the directed mode a node's score
/// accumulates from the nodes pointing at it.
///
/// The result is L2-normalized with the largest-magnitude entry
/// positive. Fails (the caller degrades the metric, never fatal)
/// when the dominant eigenvalue of `A` is zero (directed acyclic
/// structure, no arcs at all) or the iteration does not converge
/// within `max_iterations`.
pub fn eigenvector(
    graph: &CausalGraph,
    directed: bool,
    max_iterations: usize,
    tolerance: f64,
) -> Result<Vec<f64>, CentralityError> {
    let n = graph.node_count();
    if n == 0 {
        return Err(CentralityError::IllDefined {
            reason: "graph has no nodes".to_string(),
        });
    }

    let adjacency = neighbor_lists(graph, directed);
    let apply = |x: &[f64]| -> Vec<f64> {
        let mut out = vec![0.0f64; n];
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &v in neighbors {
                out[v] += x[u];
            }
        }
        out
    };

    let mut x = vec![1.0 / (n as f64).sqrt(); n];

    for _ in 0..max_iterations {
        let ax = apply(&x);
        let mut next: Vec<f64> = x.iter().zip(&ax).map(|(xi, axi)| xi + axi).collect();

        let norm = next.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm < f64::EPSILON {
            return Err(CentralityError::IllDefined {
                reason: "iteration collapsed to the zero vector".to_string(),
            });
        }
        for v in next.iter_mut() {
            *v /= norm;
        }

        let change: f64 = next.iter().zip(&x).map(|(a, b)| (a - b).abs()).sum();
        let converged = change < n as f64 * tolerance;
        x = next;
        if converged {
            // Rayleigh quotient on the unshifted adjacency: a zero
            // dominant eigenvalue means the metric is meaningless.
            let lambda: f64 = x.iter().zip(apply(&x)).map(|(xi, axi)| xi * axi).sum();
            if lambda < 1e-9 {
                return Err(CentralityError::IllDefined {
                    reason: "dominant eigenvalue is zero".to_string(),
                });
            }

            // Largest-magnitude entry positive, by convention.
            let dominant = x
                .iter()
                .cloned()
                .fold(0.0f64, |acc, v| if v.abs() > acc.abs() { v } else { acc });
            if dominant < 0.0 {
                for v in x.iter_mut() {
                    *v = -*v;
                }
            }
            return Ok(x);
        }
    }

    Err(CentralityError::NotConverged {
        iterations: max_iterations,
    })
}
