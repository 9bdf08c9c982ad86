use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tetragraph_core::config::CliOverrides;
use tetragraph_core::errors::TetragraphErrorCode;
use tetragraph_core::tracing::init_tracing;

mod pipeline;

#[derive(Parser, Debug)]
#[command(
    name = "tetragraph",
    about = "Convert a causal-graph text export into edge tables, centrality stats, and charts",
    version
)]
struct Cli {
    /// Input text export (e.g. a Tetrad GUI graph export)
    input: PathBuf,

    /// Directory for output artifacts
    #[arg(short = 'o', long = "out-dir", value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// How many top hubs to chart and label
    #[arg(long = "top-n", value_name = "N")]
    top_n: Option<usize>,

    /// Compute betweenness/eigenvector on the directed graph instead
    /// of its undirected symmetrization
    #[arg(long)]
    directed: bool,

    /// Fail when the input has no "graph edges:" marker instead of
    /// parsing from line 1
    #[arg(long = "require-edges-marker")]
    require_edges_marker: bool,

    /// Seed for the force-directed layout
    #[arg(long = "layout-seed", value_name = "SEED")]
    layout_seed: Option<u64>,

    /// Write CSV artifacts only, skip chart rendering
    #[arg(long = "no-charts")]
    no_charts: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            require_edges_marker: self.require_edges_marker.then_some(true),
            directed: self.directed.then_some(true),
            top_n: self.top_n,
            layout_seed: self.layout_seed,
            skip_charts: self.no_charts.then_some(true),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match pipeline::run(&cli.input, &cli.out_dir, &cli.overrides()) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("tetragraph: {}", e.diagnostic_string());
            ExitCode::FAILURE
        }
    }
}
