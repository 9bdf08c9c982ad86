//! Betweenness centrality via Brandes' algorithm (unweighted BFS).

use std::collections::VecDeque;

use crate::graph::CausalGraph;

/// Normalized betweenness centrality per node, in canonical node
/// order. Values lie in [0, 1].
///
/// `directed = false` runs over the undirected symmetrization; both
/// modes use the matching normalization so a path midpoint scores 1.0
/// in the undirected case. Graphs with fewer than 3 nodes have no
/// interior vertices, so everything is 0.
pub fn betweenness(graph: &CausalGraph, directed: bool) -> Vec<f64> {
    let order = graph.node_order();
    let n = order.len();
    if n < 3 {
        return vec![0.0; n];
    }

    let adjacency = neighbor_lists(graph, directed);
    let mut bc = vec![0.0f64; n];

    // One BFS + dependency accumulation per source (Brandes 2001).
    for s in 0..n {
        let mut stack = Vec::with_capacity(n);
        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0f64; n];
        let mut dist = vec![-1i64; n];
        let mut queue = VecDeque::new();

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in &adjacency[v] {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0f64; n];
        while let Some(w) = stack.pop() {
            for &v in &preds[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                bc[w] += delta[w];
            }
        }
    }

    // The source loop visits ordered pairs, which double-counts the
    // undirected case; dividing by (n-1)(n-2) in both modes yields the
    // standard normalized values.
    let scale = 1.0 / (((n - 1) * (n - 2)) as f64);
    for v in bc.iter_mut() {
        *v *= scale;
    }
    bc
}

/// Position-indexed neighbor lists over the canonical node order,
/// sorted for deterministic float accumulation.
pub(crate) fn neighbor_lists(graph: &CausalGraph, directed: bool) -> Vec<Vec<usize>> {
    let position = graph.position_map();

    graph
        .node_order()
        .iter()
        .map(|&idx| {
            let mut neighbors: Vec<usize> = if directed {
                graph
                    .out_neighbors(idx)
                    .into_iter()
                    .map(|n| position[&n])
                    .collect()
            } else {
                graph
                    .undirected_neighbors(idx)
                    .into_iter()
                    .map(|n| position[&n])
                    .collect()
            };
            neighbors.sort_unstable();
            neighbors
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::EdgeTable;
    use tetragraph_core::types::{EdgeKind, ParsedEdge};

    fn graph(rows: &[(&str, &str, EdgeKind)]) -> CausalGraph {
        CausalGraph::assemble(&EdgeTable::from_edges(
            rows.iter()
                .map(|(s, t, k)| ParsedEdge::new(*s, *t, *k))
                .collect(),
        ))
    }

    #[test]
    fn test_path_midpoint_is_one() {
        let g = graph(&[
            ("A", "B", EdgeKind::Undirected),
            ("B", "C", EdgeKind::Undirected),
        ]);
        let bc = betweenness(&g, false);
        assert_eq!(bc, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_star_center_is_one() {
        let g = graph(&[
            ("Hub", "A", EdgeKind::Undirected),
            ("Hub", "B", EdgeKind::Undirected),
            ("Hub", "C", EdgeKind::Undirected),
        ]);
        let bc = betweenness(&g, false);
        // Node order: A, B, C, Hub.
        assert_eq!(bc, vec![0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_directed_path_midpoint_half() {
        // A→B→C reaches only the ordered pair (A, C).
        let g = graph(&[
            ("A", "B", EdgeKind::Directed),
            ("B", "C", EdgeKind::Directed),
        ]);
        let bc = betweenness(&g, true);
        assert_eq!(bc, vec![0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_directed_edges_symmetrized_by_default() {
        let g = graph(&[
            ("A", "B", EdgeKind::Directed),
            ("B", "C", EdgeKind::Directed),
        ]);
        let bc = betweenness(&g, false);
        assert_eq!(bc, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_tiny_graphs_are_all_zero() {
        let g = graph(&[("A", "B", EdgeKind::Undirected)]);
        assert_eq!(betweenness(&g, false), vec![0.0, 0.0]);
    }
}
