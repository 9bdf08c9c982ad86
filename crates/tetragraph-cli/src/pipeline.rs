//! The one-pass batch pipeline:
//! read → parse → edge table → graph → centrality → artifacts.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use tetragraph_analysis::{compute_centrality, parse_text, CausalGraph, EdgeTable};
use tetragraph_core::config::{CliOverrides, TetragraphConfig};
use tetragraph_core::errors::PipelineError;
use tetragraph_export::export_artifacts;

/// Human-readable run summary printed on success.
#[derive(Debug)]
pub struct RunSummary {
    pub edges: usize,
    pub nodes: usize,
    pub arcs: usize,
    pub skipped_lines: usize,
    pub artifacts: Vec<PathBuf>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "parsed {} edges ({} lines skipped); graph has {} nodes, {} arcs",
            self.edges, self.skipped_lines, self.nodes, self.arcs
        )?;
        for path in &self.artifacts {
            writeln!(f, "  wrote {}", path.display())?;
        }
        Ok(())
    }
}

/// Run the full batch pipeline once.
///
/// Stages run strictly in order with no feedback; a failure leaves the
/// artifacts of completed stages in place.
pub fn run(
    input: &Path,
    out_dir: &Path,
    overrides: &CliOverrides,
) -> Result<RunSummary, PipelineError> {
    let config_root = input.parent().unwrap_or_else(|| Path::new("."));
    let config = TetragraphConfig::load(config_root, Some(overrides))?;

    let text = std::fs::read_to_string(input).map_err(|source| PipelineError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;

    let outcome = parse_text(&text, &config.parse)?;
    info!(
        edges = outcome.edges.len(),
        skipped = outcome.skipped_lines,
        "parsed input"
    );

    let table = EdgeTable::from_edges(outcome.edges);
    let graph = CausalGraph::assemble(&table);
    info!(nodes = graph.node_count(), arcs = graph.arc_count(), "assembled graph");

    let ranking = compute_centrality(&graph, &config.centrality);

    let artifacts = export_artifacts(out_dir, &table, &graph, &ranking, &config.render)?;

    Ok(RunSummary {
        edges: table.len(),
        nodes: graph.node_count(),
        arcs: graph.arc_count(),
        skipped_lines: outcome.skipped_lines,
        artifacts: artifacts.paths,
    })
}
