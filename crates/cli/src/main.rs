//! Redline Ledger CLI - sheet checks and terminal purchase views.
//!
//! # Usage
//!
//! ```bash
//! # Verify both sheet exports are reachable and parseable
//! rl-cli check
//!
//! # Authenticate and print a purchase view
//! rl-cli view --password s3cret
//!
//! # Same, as JSON for scripting
//! rl-cli view --password s3cret --json
//! ```
//!
//! # Commands
//!
//! - `check` - Fetch both sheets and report their dimensions
//! - `view` - Run the full authenticate/filter/aggregate cycle

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI reports to stdout; the workspace lint is meant for the servers.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rl-cli")]
#[command(author, version, about = "Redline Ledger CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify both sheet exports are reachable and parseable
    Check,
    /// Authenticate and print a purchase view
    View {
        /// Password to authenticate with
        #[arg(short, long)]
        password: String,

        /// Print the view as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Check => commands::check::run().await?,
        Commands::View { password, json } => commands::view::run(&password, json).await?,
    }
    Ok(())
}
