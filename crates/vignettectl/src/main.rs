//! Vignette Control - CLI runner for the vignette demonstrations
//!
//! Runs the two instructional units: the blocking JSON fetch and the
//! animal menagerie greetings.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "vignettectl")]
#[command(about = "Vignette - instructional demonstration runner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print a JSON document
    Fetch,

    /// Print the animal greetings
    Sounds,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fetch) => commands::fetch(),
        Some(Commands::Sounds) => commands::sounds(),
        None => {
            // No subcommand: run both one-shot demonstrations in order
            commands::fetch()?;
            commands::sounds()
        }
    }
}
