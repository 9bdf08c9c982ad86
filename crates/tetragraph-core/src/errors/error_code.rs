//! TetragraphErrorCode trait for CLI diagnostics.

/// Trait for converting tetragraph errors to structured code strings.
/// Every error enum implements this so the CLI can print a stable,
/// grep-friendly code alongside the human-readable message.
pub trait TetragraphErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn diagnostic_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the CLI boundary.
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const MISSING_EDGES_MARKER: &str = "MISSING_EDGES_MARKER";
pub const CENTRALITY_ERROR: &str = "CENTRALITY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
