//! Horizontal bar chart of the top hub nodes by degree.

use tetragraph_core::config::RenderConfig;
use tetragraph_core::types::CentralityTable;

use super::{escape_text, svg_open, SVG_CLOSE};

const BAR_HEIGHT: f64 = 18.0;
const BAR_GAP: f64 = 6.0;
const LABEL_WIDTH: f64 = 160.0;
const MARGIN: f64 = 20.0;
const TITLE_HEIGHT: f64 = 30.0;

/// Render the top-N-by-degree bar chart. The top hub is the top bar,
/// with the integer degree labeled at each bar's end.
pub fn degree_bar_chart(ranking: &CentralityTable, config: &RenderConfig) -> String {
    let top = ranking.top_n(config.effective_top_n());
    let width = config.effective_width() as f64;
    let height = TITLE_HEIGHT + MARGIN * 2.0 + top.len() as f64 * (BAR_HEIGHT + BAR_GAP);

    let max_degree = top.iter().map(|r| r.degree).fold(0.0f64, f64::max).max(1.0);
    let bar_area = (width - LABEL_WIDTH - MARGIN * 2.0 - 40.0).max(1.0);

    let mut out = svg_open(width, height);
    out.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" font-weight=\"bold\">Top {} hub nodes by degree</text>\n",
        MARGIN,
        MARGIN,
        top.len()
    ));

    for (i, row) in top.iter().enumerate() {
        let y = TITLE_HEIGHT + MARGIN + i as f64 * (BAR_HEIGHT + BAR_GAP);
        let bar_width = row.degree / max_degree * bar_area;
        let text_y = y + BAR_HEIGHT * 0.72;

        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{text_y:.1}\" font-size=\"11\" text-anchor=\"end\">{}</text>\n",
            LABEL_WIDTH - 6.0,
            escape_text(&row.node)
        ));
        out.push_str(&format!(
            "<rect x=\"{LABEL_WIDTH:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" \
             height=\"{BAR_HEIGHT:.1}\" fill=\"#4878a8\"/>\n"
        ));
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{text_y:.1}\" font-size=\"10\">{}</text>\n",
            LABEL_WIDTH + bar_width + 4.0,
            crate::csv::format_number(row.degree)
        ));
    }

    out.push_str(SVG_CLOSE);
    out
}
