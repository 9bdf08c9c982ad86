//! Shared value types for the tetragraph pipeline.

pub mod centrality;
pub mod collections;
pub mod edge;

pub use centrality::{CentralityRow, CentralityTable};
pub use edge::{EdgeKind, ParsedEdge};
