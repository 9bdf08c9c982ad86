//! Render layer configuration.
//!
//! Every styling knob is an explicit value handed to the render layer;
//! there is no process-wide mutable plotting state.

use serde::{Deserialize, Serialize};

/// Configuration for the chart render layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderConfig {
    /// How many top hubs appear in the bar chart and get labels in the
    /// network diagram.
    pub top_n: Option<usize>,

    /// Chart width in pixels.
    pub width: Option<u32>,

    /// Chart height in pixels.
    pub height: Option<u32>,

    /// Smallest node radius in the network diagram.
    pub min_node_radius: Option<f64>,

    /// Largest node radius in the network diagram.
    pub max_node_radius: Option<f64>,

    /// Seed for the force-directed layout. Fixed by default so reruns
    /// produce identical diagrams.
    pub layout_seed: Option<u64>,

    /// Force-directed layout iteration count.
    pub layout_iterations: Option<usize>,

    /// Skip chart rendering entirely (CSV artifacts only).
    pub skip_charts: Option<bool>,
}

impl RenderConfig {
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(20)
    }

    pub fn effective_width(&self) -> u32 {
        self.width.unwrap_or(800)
    }

    pub fn effective_height(&self) -> u32 {
        self.height.unwrap_or(800)
    }

    pub fn effective_min_node_radius(&self) -> f64 {
        self.min_node_radius.unwrap_or(4.0)
    }

    pub fn effective_max_node_radius(&self) -> f64 {
        self.max_node_radius.unwrap_or(24.0)
    }

    pub fn effective_layout_seed(&self) -> u64 {
        self.layout_seed.unwrap_or(42)
    }

    pub fn effective_layout_iterations(&self) -> usize {
        self.layout_iterations.unwrap_or(200)
    }

    pub fn effective_skip_charts(&self) -> bool {
        self.skip_charts.unwrap_or(false)
    }
}
