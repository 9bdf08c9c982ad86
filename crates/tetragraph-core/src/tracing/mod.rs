//! Observability for tetragraph.
//! `tracing` crate with `EnvFilter`, configured once per process.

pub mod setup;

pub use setup::init_tracing;
