//! Ranking table assembly.

use tetragraph_core::types::{CentralityRow, CentralityTable};

use crate::graph::CausalGraph;

/// Assemble the ranking table from per-node metric vectors (all in
/// canonical node order) and stable-sort it by degree descending.
/// Equal degrees keep their node-set order.
pub fn build_ranking(
    graph: &CausalGraph,
    degree: &[f64],
    betweenness: &[f64],
    eigenvector: Option<&[f64]>,
) -> CentralityTable {
    let mut rows: Vec<CentralityRow> = graph
        .node_order()
        .iter()
        .enumerate()
        .map(|(pos, &idx)| CentralityRow {
            node: graph.node_name(idx).to_string(),
            degree: degree[pos],
            betweenness: betweenness[pos],
            eigenvector: eigenvector.map(|eig| eig[pos]),
        })
        .collect();

    // Vec::sort_by is stable, which is what keeps tie order meaningful.
    rows.sort_by(|a, b| {
        b.degree
            .partial_cmp(&a.degree)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    CentralityTable::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::EdgeTable;
    use tetragraph_core::types::{EdgeKind, ParsedEdge};

    #[test]
    fn test_stable_tie_order() {
        // B and C both have degree 1; B sorts before C in the node
        // set, so B stays first after ranking.
        let g = CausalGraph::assemble(&EdgeTable::from_edges(vec![
            ParsedEdge::new("A", "C", EdgeKind::Undirected),
            ParsedEdge::new("A", "B", EdgeKind::Undirected),
        ]));
        let table = build_ranking(&g, &[2.0, 1.0, 1.0], &[0.0; 3], None);
        let ranked: Vec<&str> = table.ranked_nodes().collect();
        assert_eq!(ranked, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_every_node_has_exactly_one_row() {
        let g = CausalGraph::assemble(&EdgeTable::from_edges(vec![
            ParsedEdge::new("A", "B", EdgeKind::Directed),
            ParsedEdge::new("B", "A", EdgeKind::Directed),
        ]));
        let table = build_ranking(&g, &[1.0, 1.0], &[0.0; 2], None);
        assert_eq!(table.len(), 2);
        let mut nodes: Vec<&str> = table.ranked_nodes().collect();
        nodes.sort_unstable();
        nodes.dedup();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_undefined_eigenvector_propagates() {
        let g = CausalGraph::assemble(&EdgeTable::from_edges(vec![ParsedEdge::new(
            "A",
            "B",
            EdgeKind::Directed,
        )]));
        let table = build_ranking(&g, &[1.0, 1.0], &[0.0; 2], None);
        assert!(table.rows().iter().all(|r| r.eigenvector.is_none()));
    }
}
