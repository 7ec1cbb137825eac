//! Geographic primitives
//!
//! Coordinate validation and great-circle distance. Distance is the only
//! geometry the pricing engine needs: everything else (zones, polygons,
//! routing) is out of scope.

use crate::constants::geo::{DISTANCE_DECIMALS, EARTH_RADIUS_KM};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.lat.is_finite() || self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Calculate the great-circle distance between two points in kilometers
/// (Haversine formula, Earth radius 6371 km)
///
/// Symmetric, zero for identical points, finite and non-negative for all
/// valid coordinates including antipodal pairs.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.lat * PI / 180.0;
    let lat2 = b.lat * PI / 180.0;
    let delta_lat = (b.lat - a.lat) * PI / 180.0;
    let delta_lng = (b.lng - a.lng) * PI / 180.0;

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to the retained precision (3 decimal places)
pub fn round_km(km: f64) -> f64 {
    let factor = 10f64.powi(DISTANCE_DECIMALS as i32);
    (km * factor).round() / factor
}
