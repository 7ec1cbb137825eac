//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod quote;
pub mod serve;

use clap::{Parser, Subcommand};

/// Shipping pricing engine
#[derive(Parser)]
#[command(name = "tarifador")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quote shipping for a destination
    Quote(quote::QuoteArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote(args) => quote::run(args),
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
