//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Concurrent student submission tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest submission files into a roster and report scores
    Ingest {
        /// Path to the roster TOML file
        #[arg(long)]
        roster: PathBuf,

        /// Submission files, each ingested by its own worker
        #[arg(long, num_args = 1.., required = true)]
        submissions: Vec<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Directory to save JSON reports into
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a roster TOML file
    Validate {
        /// Path to the roster TOML file
        #[arg(long)]
        roster: PathBuf,
    },

    /// Create a starter roster and example submissions file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest {
            roster,
            submissions,
            format,
            output,
        } => commands::ingest::execute(roster, submissions, format, output).await,
        Commands::Validate { roster } => commands::validate::execute(roster),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
