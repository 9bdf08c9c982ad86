//! Line parser for causal-graph text exports.
//!
//! Tolerant by design: lines that match no notation are warned about
//! and skipped, never fatal. Only structural problems (a missing
//! `"graph edges:"` marker in strict mode) abort the parse.

pub mod cleanup;
pub mod rules;

use tetragraph_core::config::ParseConfig;
use tetragraph_core::errors::ParseError;
use tetragraph_core::types::ParsedEdge;
use tracing::warn;

pub use cleanup::clean_node_name;
pub use rules::{classify, EdgeRule, Orientation, EDGE_RULES};

/// Marker opening the edge section (case-insensitive, exact line).
const EDGES_MARKER: &str = "graph edges:";
/// Marker for the node-listing line, skipped without producing an edge.
const NODES_MARKER: &str = "graph nodes:";
/// Prefix opening the trailing attributes section; everything after is
/// ignored.
const ATTRIBUTES_MARKER: &str = "graph attributes";

/// Result of parsing one text export.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Parsed edges in file order.
    pub edges: Vec<ParsedEdge>,
    /// Count of non-blank lines that matched no notation.
    pub skipped_lines: usize,
}

/// Parse a text export into an ordered edge sequence.
///
/// Section handling: if a line equals `"graph edges:"` (after trimming,
/// case-insensitive), edges are read starting on the next line. A line
/// starting with `"graph attributes"` ends the edge section. Without an
/// edges marker, parsing starts at line 1 with a warning (a node
/// listing section can then be misread as edges), unless the config
/// demands the marker, in which case this is a parse error.
pub fn parse_text(text: &str, config: &ParseConfig) -> Result<ParseOutcome, ParseError> {
    let lines: Vec<&str> = text.lines().collect();

    let start = match lines
        .iter()
        .position(|l| l.trim().eq_ignore_ascii_case(EDGES_MARKER))
    {
        Some(marker_line) => marker_line + 1,
        None if config.effective_require_edges_marker() => {
            return Err(ParseError::MissingEdgesMarker);
        }
        None => {
            warn!("no \"graph edges:\" marker found; parsing from line 1, a node listing section may be misread as edges");
            0
        }
    };

    let mut outcome = ParseOutcome::default();

    for (offset, raw_line) in lines[start..].iter().enumerate() {
        let line_number = start + offset + 1;
        let line = raw_line.trim();

        if line.is_empty() {
            continue;
        }
        if line.to_ascii_lowercase().starts_with(ATTRIBUTES_MARKER) {
            break;
        }
        if line.eq_ignore_ascii_case(NODES_MARKER) {
            continue;
        }

        match classify(line) {
            Some((raw_source, raw_target, kind)) => {
                outcome.edges.push(ParsedEdge::new(
                    clean_node_name(raw_source),
                    clean_node_name(raw_target),
                    kind,
                ));
            }
            None => {
                warn!(line = line_number, content = %line, "line matches no edge notation, skipping");
                outcome.skipped_lines += 1;
            }
        }
    }

    Ok(outcome)
}
