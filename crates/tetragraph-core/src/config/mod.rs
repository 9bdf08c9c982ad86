//! Configuration system for tetragraph.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod centrality_config;
pub mod parse_config;
pub mod render_config;
pub mod tetragraph_config;

pub use centrality_config::CentralityConfig;
pub use parse_config::ParseConfig;
pub use render_config::RenderConfig;
pub use tetragraph_config::{CliOverrides, TetragraphConfig};
