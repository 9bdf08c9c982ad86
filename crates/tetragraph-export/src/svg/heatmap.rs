//! Adjacency heatmap with rows and columns ordered by degree.

use tetragraph_analysis::CausalGraph;
use tetragraph_core::config::RenderConfig;
use tetragraph_core::types::CentralityTable;

use super::{escape_text, svg_open, SVG_CLOSE};

const LABEL_SPACE: f64 = 110.0;
const MARGIN: f64 = 20.0;

/// Render the adjacency heatmap. Node order follows the ranking
/// (degree descending), so hub structure clusters in the top-left
/// corner. A filled cell at (row i, column j) is the arc i → j.
pub fn adjacency_heatmap(
    graph: &CausalGraph,
    ranking: &CentralityTable,
    config: &RenderConfig,
) -> String {
    // Ranking order → node indices.
    let order: Vec<_> = ranking
        .ranked_nodes()
        .filter_map(|name| graph.get_node(name))
        .collect();
    let matrix = graph.adjacency_matrix(&order);
    let n = order.len();

    let width = config.effective_width() as f64;
    let grid = (width - LABEL_SPACE - MARGIN * 2.0).max(1.0);
    let cell = if n == 0 { grid } else { grid / n as f64 };
    let height = LABEL_SPACE + MARGIN * 2.0 + grid;

    let x0 = LABEL_SPACE + MARGIN;
    let y0 = LABEL_SPACE + MARGIN;

    let mut out = svg_open(width, height);
    out.push_str(&format!(
        "<rect x=\"{x0:.1}\" y=\"{y0:.1}\" width=\"{grid:.1}\" height=\"{grid:.1}\" \
         fill=\"#f4f4f4\" stroke=\"#cccccc\" stroke-width=\"0.5\"/>\n"
    ));

    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value == 1 {
                let x = x0 + j as f64 * cell;
                let y = y0 + i as f64 * cell;
                out.push_str(&format!(
                    "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{cell:.2}\" \
                     height=\"{cell:.2}\" fill=\"#30506e\"/>\n"
                ));
            }
        }
    }

    for (i, &idx) in order.iter().enumerate() {
        let name = escape_text(graph.node_name(idx));
        let center = (i as f64 + 0.5) * cell;
        // Row label on the left.
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"8\" text-anchor=\"end\">{name}</text>\n",
            x0 - 4.0,
            y0 + center + 2.5
        ));
        // Column label, rotated.
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"8\" text-anchor=\"start\" \
             transform=\"rotate(-90 {:.1} {:.1})\">{name}</text>\n",
            x0 + center,
            y0 - 4.0,
            x0 + center,
            y0 - 4.0
        ));
    }

    out.push_str(SVG_CLOSE);
    out
}
