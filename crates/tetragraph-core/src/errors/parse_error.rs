//! Parser errors.

use super::error_code::{self, TetragraphErrorCode};

/// Errors that can occur while parsing a graph text export or a
/// previously written edge-table CSV.
///
/// Unrecognized edge lines are not errors; the parser warns and skips
/// them. These variants cover the cases where continuing would produce
/// a structurally wrong table.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("No \"graph edges:\" marker found and strict marker mode is enabled")]
    MissingEdgesMarker,

    #[error("Malformed CSV on line {line}: {message}")]
    MalformedCsv { line: usize, message: String },

    #[error("Edge table CSV is missing required column: {name}")]
    MissingColumn { name: String },

    #[error("Invalid edge type {value:?} on line {line}")]
    InvalidEdgeType { line: usize, value: String },
}

impl TetragraphErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingEdgesMarker => error_code::MISSING_EDGES_MARKER,
            _ => error_code::PARSE_ERROR,
        }
    }
}
