//! Error handling for tetragraph.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod centrality_error;
pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod parse_error;
pub mod pipeline_error;

pub use centrality_error::CentralityError;
pub use config_error::ConfigError;
pub use error_code::TetragraphErrorCode;
pub use export_error::ExportError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
