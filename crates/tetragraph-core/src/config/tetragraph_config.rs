//! Top-level tetragraph configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CentralityConfig, ParseConfig, RenderConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TETRAGRAPH_*`)
/// 3. Project config (`tetragraph.toml` next to the input)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TetragraphConfig {
    pub parse: ParseConfig,
    pub centrality: CentralityConfig,
    pub render: RenderConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub require_edges_marker: Option<bool>,
    pub directed: Option<bool>,
    pub top_n: Option<usize>,
    pub layout_seed: Option<u64>,
    pub skip_charts: Option<bool>,
}

impl TetragraphConfig {
    /// Load configuration with layered resolution.
    ///
    /// `root` is the directory searched for `tetragraph.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("tetragraph.toml");
        if project_config_path.exists() {
            let text = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            let file_config: TetragraphConfig =
                toml::from_str(&text).map_err(|e| ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                })?;
            config.merge_from(file_config);
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: TetragraphConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Overlay every field that `other` sets onto `self`.
    fn merge_from(&mut self, other: TetragraphConfig) {
        fn take<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }
        take(&mut self.parse.require_edges_marker, other.parse.require_edges_marker);
        take(&mut self.centrality.directed, other.centrality.directed);
        take(&mut self.centrality.max_iterations, other.centrality.max_iterations);
        take(&mut self.centrality.tolerance, other.centrality.tolerance);
        take(&mut self.render.top_n, other.render.top_n);
        take(&mut self.render.width, other.render.width);
        take(&mut self.render.height, other.render.height);
        take(&mut self.render.min_node_radius, other.render.min_node_radius);
        take(&mut self.render.max_node_radius, other.render.max_node_radius);
        take(&mut self.render.layout_seed, other.render.layout_seed);
        take(&mut self.render.layout_iterations, other.render.layout_iterations);
        take(&mut self.render.skip_charts, other.render.skip_charts);
    }

    /// Apply `TETRAGRAPH_*` environment variable overrides.
    fn apply_env_overrides(config: &mut TetragraphConfig) {
        if let Some(v) = env_parse::<bool>("TETRAGRAPH_REQUIRE_EDGES_MARKER") {
            config.parse.require_edges_marker = Some(v);
        }
        if let Some(v) = env_parse::<bool>("TETRAGRAPH_DIRECTED") {
            config.centrality.directed = Some(v);
        }
        if let Some(v) = env_parse::<usize>("TETRAGRAPH_TOP_N") {
            config.render.top_n = Some(v);
        }
        if let Some(v) = env_parse::<u64>("TETRAGRAPH_LAYOUT_SEED") {
            config.render.layout_seed = Some(v);
        }
    }

    /// Apply CLI flag overrides (highest priority).
    fn apply_cli_overrides(config: &mut TetragraphConfig, cli: &CliOverrides) {
        if cli.require_edges_marker.is_some() {
            config.parse.require_edges_marker = cli.require_edges_marker;
        }
        if cli.directed.is_some() {
            config.centrality.directed = cli.directed;
        }
        if cli.top_n.is_some() {
            config.render.top_n = cli.top_n;
        }
        if cli.layout_seed.is_some() {
            config.render.layout_seed = cli.layout_seed;
        }
        if cli.skip_charts.is_some() {
            config.render.skip_charts = cli.skip_charts;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &TetragraphConfig) -> Result<(), ConfigError> {
        if let Some(top_n) = config.render.top_n {
            if top_n == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "render.top_n".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(iterations) = config.centrality.max_iterations {
            if iterations == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "centrality.max_iterations".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(tolerance) = config.centrality.tolerance {
            if !(tolerance > 0.0 && tolerance < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "centrality.tolerance".to_string(),
                    message: "must be between 0.0 and 1.0 exclusive".to_string(),
                });
            }
        }
        let min_r = config.render.effective_min_node_radius();
        let max_r = config.render.effective_max_node_radius();
        if !(min_r > 0.0 && max_r >= min_r) {
            return Err(ConfigError::ValidationFailed {
                field: "render.min_node_radius".to_string(),
                message: "radii must be positive with min <= max".to_string(),
            });
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
