//! tarifador: Shipping Pricing Engine
//!
//! A library and CLI tool for pricing deliveries from a single store
//! location: free within an admin-configured radius, per-kilometer
//! beyond it with a minimum charge.
//!
//! ## Features
//!
//! - Haversine great-circle distance between store and destination
//! - Inclusive free-radius boundary with a configurable pricing floor
//! - Atomically replaceable shipping configuration (lock-free reads)
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use tarifador::geo::{haversine_km, Coordinates};
//! use tarifador::shipping::{pricing, ShippingConfig};
//!
//! let config = ShippingConfig::default();
//! let store = config.store_coordinates();
//! let dest = Coordinates::new(-12.05, -77.05); // Lima centro
//!
//! let distance = haversine_km(store, dest);
//! let quote = pricing::quote(distance, &config);
//! println!("{} -> {}", quote.distance_km, quote.message);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod server;
pub mod shipping;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::Coordinates;
pub use shipping::{Address, Quote, ShippingConfig, ValidationError};
