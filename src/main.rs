//! tarifador CLI entry point
//!
//! Shipping pricing engine - CLI + HTTP API

use tarifador::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
