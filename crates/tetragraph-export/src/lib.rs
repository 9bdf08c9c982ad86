//! Export layer for tetragraph: CSV artifacts and SVG charts.
//!
//! A write-only sink; nothing here feeds back into the pipeline. Any
//! I/O failure is fatal; artifacts already written by earlier stages
//! are left in place.

pub mod csv;
pub mod svg;

use std::path::{Path, PathBuf};

use tetragraph_analysis::{CausalGraph, EdgeTable};
use tetragraph_core::config::RenderConfig;
use tetragraph_core::errors::ExportError;
use tetragraph_core::types::CentralityTable;
use tracing::info;

/// Paths of everything a run produced.
#[derive(Debug, Clone, Default)]
pub struct Artifacts {
    pub paths: Vec<PathBuf>,
}

/// Write every artifact into `out_dir`: the three CSV tables, and the
/// three charts unless `render.skip_charts` is set.
pub fn export_artifacts(
    out_dir: &Path,
    table: &EdgeTable,
    graph: &CausalGraph,
    ranking: &CentralityTable,
    render: &RenderConfig,
) -> Result<Artifacts, ExportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::OutputDirFailed {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut artifacts = Artifacts::default();
    let mut emit = |name: &str, content: String| -> Result<(), ExportError> {
        let path = out_dir.join(name);
        csv::write_artifact(&path, &content)?;
        info!(path = %path.display(), "wrote artifact");
        artifacts.paths.push(path);
        Ok(())
    };

    emit("edges.csv", table.to_csv())?;
    emit("adjacency_matrix.csv", csv::adjacency_matrix_csv(graph))?;
    emit("node_centrality.csv", csv::centrality_csv(ranking))?;

    if !render.effective_skip_charts() {
        emit("top_hubs_bar.svg", svg::degree_bar_chart(ranking, render))?;
        emit("network_hubs.svg", svg::network_diagram(graph, ranking, render))?;
        emit(
            "adjacency_heatmap.svg",
            svg::adjacency_heatmap(graph, ranking, render),
        )?;
    }

    Ok(artifacts)
}
