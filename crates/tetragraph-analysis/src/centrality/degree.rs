//! Degree centrality: distinct-neighbor counts, optionally weighted.

use crate::graph::CausalGraph;

/// Degree per node, in the graph's canonical node order.
///
/// Unweighted: the number of distinct neighbors in the underlying
/// undirected sense (in- and out-neighbors merged, so a bidirectional
/// arc pair counts once). Weighted tables instead sum the weight of
/// each distinct neighbor link.
pub fn degrees(graph: &CausalGraph) -> Vec<f64> {
    graph
        .node_order()
        .iter()
        .map(|&idx| {
            let neighbors = graph.undirected_neighbors(idx);
            match graph.arc_weights() {
                None => neighbors.len() as f64,
                Some(weights) => neighbors
                    .iter()
                    .map(|&n| {
                        weights
                            .get(&(idx, n))
                            .or_else(|| weights.get(&(n, idx)))
                            .copied()
                            .unwrap_or(1.0)
                    })
                    .sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::EdgeTable;
    use tetragraph_core::types::{EdgeKind, ParsedEdge};

    #[test]
    fn test_scenario_degrees() {
        // A --> B, B --- C: degrees A=1, B=2, C=1.
        let g = CausalGraph::assemble(&EdgeTable::from_edges(vec![
            ParsedEdge::new("A", "B", EdgeKind::Directed),
            ParsedEdge::new("B", "C", EdgeKind::Undirected),
        ]));
        assert_eq!(degrees(&g), vec![1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_bidirectional_pair_counts_once() {
        let g = CausalGraph::assemble(&EdgeTable::from_edges(vec![
            ParsedEdge::new("A", "B", EdgeKind::Directed),
            ParsedEdge::new("B", "A", EdgeKind::Directed),
        ]));
        assert_eq!(degrees(&g), vec![1.0, 1.0]);
    }

    #[test]
    fn test_weighted_degree_sums_weights() {
        let csv = "source,target,type,weight\nA,B,directed,2\nB,C,undirected,0.5\n";
        let table = EdgeTable::from_csv(csv).unwrap();
        let g = CausalGraph::assemble(&table);
        // A=2, B=2.5, C=0.5
        assert_eq!(degrees(&g), vec![2.0, 2.5, 0.5]);
    }
}
