//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tetragraph tracing/logging system.
///
/// Reads the `TETRAGRAPH_LOG` environment variable for per-subsystem
/// log levels, e.g. `TETRAGRAPH_LOG=tetragraph_analysis=debug`.
/// Falls back to `info` when unset or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TETRAGRAPH_LOG")
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
