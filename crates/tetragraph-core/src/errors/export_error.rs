//! Export errors.

use std::path::PathBuf;

use super::error_code::{self, TetragraphErrorCode};

/// Errors from the export layer. All of these are fatal: the export
/// layer is a write-only sink with no partial-failure recovery.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write artifact {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory {path} could not be created: {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TetragraphErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
