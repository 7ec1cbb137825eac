//! Quote command handler
//!
//! Computes a shipping quote against the stored configuration without
//! going through the HTTP server.

use crate::config::Config;
use crate::error::Result;
use crate::geo::{haversine_km, Coordinates};
use crate::shipping::{pricing, ConfigStore};
use clap::Args;

/// Quote command arguments
#[derive(Args)]
pub struct QuoteArgs {
    /// Destination latitude
    #[arg(long)]
    pub lat: f64,

    /// Destination longitude
    #[arg(long)]
    pub lng: f64,

    /// Output the quote as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the quote command
pub fn run(args: QuoteArgs) -> Result<()> {
    let dest = Coordinates::new(args.lat, args.lng);
    dest.validate()?;

    let store = ConfigStore::open(Config::shipping_path()?)?;
    let config = store.get();

    let distance = haversine_km(config.store_coordinates(), dest);
    let quote = pricing::quote(distance, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", quote.message);
        println!("  distance:  {} km", quote.distance_km);
        println!("  free:      {}", quote.is_free);
        println!("  cost:      {:.2}", quote.shipping_cost);
    }

    Ok(())
}
