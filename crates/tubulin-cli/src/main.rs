mod commands;
mod metadata;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tubulin", about = "Microtubule quantification for fluorescent cell images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantify a single cell image
    Analyze(commands::analyze::AnalyzeArgs),
    /// Quantify every image in a directory and write a results CSV
    Batch(commands::batch::BatchArgs),
    /// Summarize a results CSV as a dose-response table
    Dose(commands::dose::DoseArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Dose(args) => commands::dose::run(args),
    }
}
