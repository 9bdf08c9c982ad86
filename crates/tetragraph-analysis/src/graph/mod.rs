//! Graph assembly: petgraph StableGraph over cleaned node names.
//!
//! The assembled graph is a directed simple graph. Undirected table
//! rows contribute both arcs; duplicate arcs collapse (no multi-edge
//! weight accumulation). The node set is the lexicographically sorted
//! union of all endpoints, so node indices and every downstream
//! artifact are deterministic for a given input.

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;
use tetragraph_core::types::collections::{BTreeSet, FxHashMap, FxHashSet};
use tetragraph_core::types::EdgeKind;

use crate::table::EdgeTable;

/// Arc weights keyed by (source, target) node index, populated only
/// when the edge table carries a `weight` column. Undirected rows
/// store the weight under both orderings.
pub type ArcWeights = FxHashMap<(NodeIndex, NodeIndex), f64>;

/// Directed simple graph with name-indexed access.
pub struct CausalGraph {
    /// The petgraph stable graph; node weights are the node names.
    pub graph: StableGraph<String, (), Directed>,
    /// Map from node name → NodeIndex for O(1) lookup.
    node_index: FxHashMap<String, NodeIndex>,
    /// Node indices in insertion (sorted-name) order.
    node_order: Vec<NodeIndex>,
    /// Arc weights from the table's optional `weight` column.
    weights: Option<ArcWeights>,
}

impl CausalGraph {
    /// Assemble the graph from an edge table.
    ///
    /// Nodes are inserted in sorted name order before any arc is
    /// added, so isolated nodes (none today, but the node set is
    /// derived independently of arcs) would survive with degree 0.
    pub fn assemble(table: &EdgeTable) -> Self {
        let mut names = BTreeSet::new();
        for row in table.rows() {
            names.insert(row.source.as_str());
            names.insert(row.target.as_str());
        }

        let mut graph = StableGraph::new();
        let mut node_index = FxHashMap::default();
        let mut node_order = Vec::with_capacity(names.len());
        for name in names {
            let idx = graph.add_node(name.to_string());
            node_index.insert(name.to_string(), idx);
            node_order.push(idx);
        }

        let mut assembled = Self {
            graph,
            node_index,
            node_order,
            weights: None,
        };

        let mut weights = table.weights().map(|_| ArcWeights::default());
        for (i, row) in table.rows().iter().enumerate() {
            let s = assembled.node_index[&row.source];
            let t = assembled.node_index[&row.target];
            assembled.add_arc(s, t);
            if row.kind == EdgeKind::Undirected {
                assembled.add_arc(t, s);
            }
            if let (Some(weights), Some(table_weights)) = (weights.as_mut(), table.weights()) {
                let w = table_weights[i];
                weights.insert((s, t), w);
                if row.kind == EdgeKind::Undirected {
                    weights.insert((t, s), w);
                }
            }
        }
        assembled.weights = weights;
        assembled
    }

    /// Add one arc; a no-op when the arc already exists
    /// (simple-graph semantics).
    fn add_arc(&mut self, source: NodeIndex, target: NodeIndex) {
        self.graph.update_edge(source, target, ());
    }

    /// Look up a node index by name.
    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    /// Node name for an index.
    pub fn node_name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Node indices in sorted-name order. This is the canonical node
    /// iteration order for every downstream table.
    pub fn node_order(&self) -> &[NodeIndex] {
        &self.node_order
    }

    /// Map from node index → position in the canonical node order.
    pub fn position_map(&self) -> FxHashMap<NodeIndex, usize> {
        self.node_order
            .iter()
            .enumerate()
            .map(|(pos, &idx)| (idx, pos))
            .collect()
    }

    /// Node names in sorted order.
    pub fn sorted_node_names(&self) -> Vec<&str> {
        self.node_order.iter().map(|&i| self.node_name(i)).collect()
    }

    /// True if the arc source → target exists.
    pub fn has_arc(&self, source: NodeIndex, target: NodeIndex) -> bool {
        self.graph.find_edge(source, target).is_some()
    }

    /// Out-neighbors of a node (directed view).
    pub fn out_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .collect()
    }

    /// Distinct neighbors in the underlying undirected sense: the
    /// union of in- and out-neighbors, self-loops counted once.
    pub fn undirected_neighbors(&self, idx: NodeIndex) -> FxHashSet<NodeIndex> {
        let mut neighbors: FxHashSet<NodeIndex> = self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .collect();
        neighbors.extend(self.graph.neighbors_directed(idx, petgraph::Direction::Incoming));
        neighbors
    }

    /// Arc weights, present only for weighted tables.
    pub fn arc_weights(&self) -> Option<&ArcWeights> {
        self.weights.as_ref()
    }

    /// Square 0/1 adjacency matrix over the given node ordering.
    /// `matrix[i][j] == 1` iff the arc `order[i] → order[j]` exists.
    pub fn adjacency_matrix(&self, order: &[NodeIndex]) -> Vec<Vec<u8>> {
        order
            .iter()
            .map(|&i| {
                order
                    .iter()
                    .map(|&j| u8::from(self.has_arc(i, j)))
                    .collect()
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetragraph_core::types::ParsedEdge;

    fn table(rows: &[(&str, &str, EdgeKind)]) -> EdgeTable {
        EdgeTable::from_edges(
            rows.iter()
                .map(|(s, t, k)| ParsedEdge::new(*s, *t, *k))
                .collect(),
        )
    }

    #[test]
    fn test_undirected_expands_to_both_arcs() {
        let g = CausalGraph::assemble(&table(&[("A", "B", EdgeKind::Undirected)]));
        let a = g.get_node("A").unwrap();
        let b = g.get_node("B").unwrap();
        assert!(g.has_arc(a, b));
        assert!(g.has_arc(b, a));
    }

    #[test]
    fn test_directed_adds_single_arc() {
        let g = CausalGraph::assemble(&table(&[("A", "B", EdgeKind::Directed)]));
        let a = g.get_node("A").unwrap();
        let b = g.get_node("B").unwrap();
        assert!(g.has_arc(a, b));
        assert!(!g.has_arc(b, a));
    }

    #[test]
    fn test_duplicate_arcs_collapse() {
        let g = CausalGraph::assemble(&table(&[
            ("A", "B", EdgeKind::Directed),
            ("A", "B", EdgeKind::Directed),
            ("A", "B", EdgeKind::Undirected),
        ]));
        assert_eq!(g.arc_count(), 2); // A→B and B→A only
    }

    #[test]
    fn test_node_order_is_sorted() {
        let g = CausalGraph::assemble(&table(&[
            ("C", "A", EdgeKind::Directed),
            ("B", "C", EdgeKind::Directed),
        ]));
        assert_eq!(g.sorted_node_names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_each_endpoint_appears_once() {
        let g = CausalGraph::assemble(&table(&[
            ("A", "B", EdgeKind::Directed),
            ("B", "A", EdgeKind::Directed),
            ("A", "B", EdgeKind::Undirected),
        ]));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_adjacency_matrix_scenario() {
        // A --> B, B --- C
        let g = CausalGraph::assemble(&table(&[
            ("A", "B", EdgeKind::Directed),
            ("B", "C", EdgeKind::Undirected),
        ]));
        let m = g.adjacency_matrix(g.node_order());
        assert_eq!(m, vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 1, 0]]);
    }
}
