//! Weft CLI: simulation, benchmarking, and snapshot inspection.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "Weft: mass-spring cloth simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a run file.
    Simulate {
        /// Path to the run file (TOML, or JSON by extension).
        #[arg(short, long, default_value = "simulation.toml")]
        config: String,

        /// Write the final state as a binary snapshot.
        #[arg(long)]
        snapshot: Option<String>,

        /// Write captured frames as JSON.
        #[arg(long)]
        export: Option<String>,

        /// Capture a frame every N steps when exporting.
        #[arg(long, default_value_t = 10)]
        every: u32,
    },

    /// Run the benchmark suite.
    Benchmark {
        /// Which scenario to run (hanging_cloth, breeze, weightless, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Override the scenario step count.
        #[arg(long)]
        steps: Option<u32>,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a run file or snapshot.
    Validate {
        /// Path to a .toml/.json run file or a .bin snapshot.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { config, snapshot, export, every } => {
            commands::simulate(&config, snapshot.as_deref(), export.as_deref(), every)
        }
        Commands::Benchmark { scenario, steps, output } => {
            commands::benchmark(&scenario, steps, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
