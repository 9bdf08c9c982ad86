//! Hand-built SVG charts.
//!
//! The corpus convention for visual output is generated markup, so the
//! three publication charts are plain SVG strings: no canvas library,
//! no fonts to bundle, and deterministic output byte-for-byte.

pub mod bar_chart;
pub mod heatmap;
pub mod layout;
pub mod network;

pub use bar_chart::degree_bar_chart;
pub use heatmap::adjacency_heatmap;
pub use network::network_diagram;

/// Escape text for SVG/XML content.
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared SVG document shell.
pub(crate) fn svg_open(width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" \
         viewBox=\"0 0 {width:.0} {height:.0}\" font-family=\"sans-serif\">\n"
    )
}

pub(crate) const SVG_CLOSE: &str = "</svg>\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("A & B <\"C\">"), "A &amp; B &lt;&quot;C&quot;&gt;");
        assert_eq!(escape_text("plain"), "plain");
    }
}
