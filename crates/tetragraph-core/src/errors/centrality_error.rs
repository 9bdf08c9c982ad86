//! Centrality computation errors.

use super::error_code::{self, TetragraphErrorCode};

/// Errors from a single centrality metric computation.
///
/// These never abort the pipeline: the engine catches them, logs a
/// warning, and degrades the affected column to the undefined sentinel.
#[derive(Debug, thiserror::Error)]
pub enum CentralityError {
    #[error("Power iteration failed to converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("Eigenvector centrality is undefined: {reason}")]
    IllDefined { reason: String },
}

impl TetragraphErrorCode for CentralityError {
    fn error_code(&self) -> &'static str {
        error_code::CENTRALITY_ERROR
    }
}
