//! CSV artifact writers: adjacency matrix and centrality ranking.
//!
//! The edge list reuses `EdgeTable::to_csv`; these two are derived
//! tables that only exist at export time.

use std::path::Path;

use tetragraph_analysis::table::csv::escape_field;
use tetragraph_analysis::CausalGraph;
use tetragraph_core::errors::ExportError;
use tetragraph_core::types::CentralityTable;

/// Square 0/1 adjacency matrix CSV. Rows and columns are the sorted
/// node identifiers; the first header cell is left empty, index-column
/// style, so the matrix reads back naturally in dataframe tools.
pub fn adjacency_matrix_csv(graph: &CausalGraph) -> String {
    let names = graph.sorted_node_names();
    let matrix = graph.adjacency_matrix(graph.node_order());

    let mut out = String::new();
    for name in &names {
        out.push(',');
        out.push_str(&escape_field(name));
    }
    out.push('\n');

    for (row_name, row) in names.iter().zip(&matrix) {
        out.push_str(&escape_field(row_name));
        for cell in row {
            out.push(',');
            out.push(if *cell == 1 { '1' } else { '0' });
        }
        out.push('\n');
    }
    out
}

/// Centrality ranking CSV with columns `node,degree,betweenness,eig`.
/// A degraded eigenvector serializes as an empty field.
pub fn centrality_csv(ranking: &CentralityTable) -> String {
    let mut out = String::from("node,degree,betweenness,eig\n");
    for row in ranking.rows() {
        out.push_str(&escape_field(&row.node));
        out.push(',');
        out.push_str(&format_number(row.degree));
        out.push(',');
        out.push_str(&format_number(row.betweenness));
        out.push(',');
        if let Some(eig) = row.eigenvector {
            out.push_str(&format_number(eig));
        }
        out.push('\n');
    }
    out
}

/// Write one artifact, wrapping failures with the target path.
pub fn write_artifact(path: &Path, content: &str) -> Result<(), ExportError> {
    std::fs::write(path, content).map_err(|source| ExportError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Integer-valued numbers render without a decimal point, so
/// unweighted degrees read as plain integers.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
