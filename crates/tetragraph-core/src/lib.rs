//! Core types, traits, errors, config, and tracing for the tetragraph
//! pipeline.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::TetragraphConfig;
pub use errors::{PipelineError, TetragraphErrorCode};
