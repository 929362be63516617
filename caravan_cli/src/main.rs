use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod report;
mod solve;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan deliveries for a JSON problem file and print the report.
    Solve {
        #[arg(short, long)]
        input: PathBuf,

        /// Also print the network overlay (nodes and highlighted roads).
        #[arg(long)]
        overlay: bool,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Solve { input, overlay } => solve::run(&input, overlay),
    }
}
