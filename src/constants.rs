//! Centralized constants for the tarifador crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometers (WGS84 approximation)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Decimal places retained on computed distances.
    ///
    /// Three places (meter resolution) keeps pricing stable near the
    /// free-radius boundary while matching what callers see on the wire.
    pub const DISTANCE_DECIMALS: u32 = 3;

    /// Decimal places retained on monetary amounts
    pub const COST_DECIMALS: u32 = 2;
}
