//! Analysis core for tetragraph: text-export parsing, edge table
//! building, graph assembly, and centrality computation.
//!
//! Data flows strictly one way:
//! raw text → parsed edges → edge table → graph → centrality table.

pub mod centrality;
pub mod graph;
pub mod parser;
pub mod table;

pub use centrality::compute_centrality;
pub use graph::CausalGraph;
pub use parser::{parse_text, ParseOutcome};
pub use table::EdgeTable;
