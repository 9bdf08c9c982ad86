//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the line parser.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParseConfig {
    /// When true, an input without a `"graph edges:"` marker is a hard
    /// parse error. When false (default), parsing starts at line 1 with
    /// a warning, so headerless exports and plain edge lists stay
    /// accepted.
    pub require_edges_marker: Option<bool>,
}

impl ParseConfig {
    pub fn effective_require_edges_marker(&self) -> bool {
        self.require_edges_marker.unwrap_or(false)
    }
}
