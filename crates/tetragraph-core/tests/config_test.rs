//! Tests for the tetragraph configuration system.

use std::sync::Mutex;

use tetragraph_core::config::{CliOverrides, TetragraphConfig};
use tetragraph_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_tetragraph_env_vars() {
    for key in [
        "TETRAGRAPH_REQUIRE_EDGES_MARKER",
        "TETRAGRAPH_DIRECTED",
        "TETRAGRAPH_TOP_N",
        "TETRAGRAPH_LAYOUT_SEED",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tetragraph_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("tetragraph.toml"),
        r#"
[render]
top_n = 10

[centrality]
directed = true
"#,
    )
    .unwrap();

    // Env overrides the project file for top_n
    std::env::set_var("TETRAGRAPH_TOP_N", "15");

    // CLI overrides everything for directed
    let cli = CliOverrides {
        directed: Some(false),
        ..Default::default()
    };

    let config = TetragraphConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.render.top_n, Some(15));
    assert_eq!(config.centrality.directed, Some(false));

    clear_tetragraph_env_vars();
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tetragraph_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = TetragraphConfig::load(dir.path(), None).unwrap();

    assert!(!config.parse.effective_require_edges_marker());
    assert!(!config.centrality.effective_directed());
    assert_eq!(config.render.effective_top_n(), 20);
    assert_eq!(config.render.effective_layout_seed(), 42);
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tetragraph_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("tetragraph.toml"), "not valid toml {{{{").unwrap();

    let result = TetragraphConfig::load(dir.path(), None);
    match result.unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {other:?}"),
    }
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tetragraph_env_vars();

    for toml in [
        "[render]\ntop_n = 0\n",
        "[centrality]\nmax_iterations = 0\n",
        "[centrality]\ntolerance = 1.5\n",
        "[render]\nmin_node_radius = 30.0\nmax_node_radius = 4.0\n",
    ] {
        let result = TetragraphConfig::from_toml(toml);
        match result.unwrap_err() {
            ConfigError::ValidationFailed { .. } => {}
            other => panic!("Expected ValidationFailed for {toml:?}, got: {other:?}"),
        }
    }
}
