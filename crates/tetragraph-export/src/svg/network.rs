//! Force-directed network diagram with degree-scaled node sizes.

use tetragraph_analysis::CausalGraph;
use tetragraph_core::config::RenderConfig;
use tetragraph_core::types::collections::FxHashSet;
use tetragraph_core::types::CentralityTable;

use super::layout::fruchterman_reingold;
use super::{escape_text, svg_open, SVG_CLOSE};

const MARGIN: f64 = 40.0;

/// Render the network diagram: spring layout, node radius scaled from
/// degree, labels only on the top-N hubs to keep the plot readable.
pub fn network_diagram(
    graph: &CausalGraph,
    ranking: &CentralityTable,
    config: &RenderConfig,
) -> String {
    let width = config.effective_width() as f64;
    let height = config.effective_height() as f64;
    let order = graph.node_order();
    let position_of = graph.position_map();

    // Undirected edge set for the layout and the line segments;
    // bidirectional arc pairs draw once.
    let mut segments: FxHashSet<(usize, usize)> = FxHashSet::default();
    for &idx in order {
        let a = position_of[&idx];
        for n in graph.out_neighbors(idx) {
            let b = position_of[&n];
            segments.insert((a.min(b), a.max(b)));
        }
    }
    let mut segments: Vec<(usize, usize)> = segments.into_iter().collect();
    segments.sort_unstable();

    let layout = fruchterman_reingold(
        order.len(),
        &segments,
        config.effective_layout_iterations(),
        config.effective_layout_seed(),
    );
    let place = |pos: usize| -> (f64, f64) {
        let (x, y) = layout[pos];
        (
            MARGIN + x * (width - 2.0 * MARGIN),
            MARGIN + y * (height - 2.0 * MARGIN),
        )
    };

    // Degree-scaled radii over the ranking's degree column.
    let degree_of = |pos: usize| -> f64 {
        let name = graph.node_name(order[pos]);
        ranking
            .rows()
            .iter()
            .find(|r| r.node == name)
            .map(|r| r.degree)
            .unwrap_or(0.0)
    };
    let degrees: Vec<f64> = (0..order.len()).map(degree_of).collect();
    let (min_d, max_d) = degrees
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| {
            (lo.min(d), hi.max(d))
        });
    let min_r = config.effective_min_node_radius();
    let max_r = config.effective_max_node_radius();
    let radius = |d: f64| -> f64 {
        if max_d <= min_d {
            (min_r + max_r) / 2.0
        } else {
            min_r + (d - min_d) / (max_d - min_d) * (max_r - min_r)
        }
    };

    let labeled: FxHashSet<&str> = ranking
        .top_n(config.effective_top_n())
        .iter()
        .map(|r| r.node.as_str())
        .collect();

    let mut out = svg_open(width, height);

    for &(a, b) in &segments {
        let (x1, y1) = place(a);
        let (x2, y2) = place(b);
        out.push_str(&format!(
            "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
             stroke=\"#999999\" stroke-width=\"0.6\" stroke-opacity=\"0.4\"/>\n"
        ));
    }

    for (pos, &idx) in order.iter().enumerate() {
        let (x, y) = place(pos);
        let r = radius(degrees[pos]);
        out.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{r:.1}\" fill=\"#4878a8\" \
             fill-opacity=\"0.85\"/>\n"
        ));
        let name = graph.node_name(idx);
        if labeled.contains(name) {
            out.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"10\" text-anchor=\"middle\">{}</text>\n",
                y - r - 3.0,
                escape_text(name)
            ));
        }
    }

    out.push_str(SVG_CLOSE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetragraph_analysis::{compute_centrality, EdgeTable};
    use tetragraph_core::config::CentralityConfig;
    use tetragraph_core::types::{EdgeKind, ParsedEdge};

    fn setup() -> (CausalGraph, CentralityTable) {
        let graph = CausalGraph::assemble(&EdgeTable::from_edges(vec![
            ParsedEdge::new("Hub", "A", EdgeKind::Undirected),
            ParsedEdge::new("Hub", "B", EdgeKind::Undirected),
        ]));
        let ranking = compute_centrality(&graph, &CentralityConfig::default());
        (graph, ranking)
    }

    #[test]
    fn test_diagram_is_deterministic() {
        let (graph, ranking) = setup();
        let config = RenderConfig::default();
        assert_eq!(
            network_diagram(&graph, &ranking, &config),
            network_diagram(&graph, &ranking, &config)
        );
    }

    #[test]
    fn test_one_circle_per_node_one_line_per_link() {
        let (graph, ranking) = setup();
        let svg = network_diagram(&graph, &ranking, &RenderConfig::default());
        assert_eq!(svg.matches("<circle").count(), 3);
        // Two undirected links → two segments, not four.
        assert_eq!(svg.matches("<line").count(), 2);
    }

    #[test]
    fn test_only_top_n_labeled() {
        let (graph, ranking) = setup();
        let config = RenderConfig {
            top_n: Some(1),
            ..Default::default()
        };
        let svg = network_diagram(&graph, &ranking, &config);
        assert_eq!(svg.matches("<text").count(), 1);
        assert!(svg.contains(">Hub</text>"));
    }
}
