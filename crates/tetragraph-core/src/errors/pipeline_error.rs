//! Pipeline error aggregation.

use std::path::PathBuf;

use super::error_code::{self, TetragraphErrorCode};
use super::{ConfigError, ExportError, ParseError};

/// Errors that can occur during a batch pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Failed to read input {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl TetragraphErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InputRead { .. } => error_code::IO_ERROR,
            Self::Parse(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
        }
    }
}
