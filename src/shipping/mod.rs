//! Shipping domain types
//!
//! This module handles:
//! - The admin-editable shipping configuration and its validation
//! - Destination addresses supplied at checkout
//! - Pricing (free radius + per-km rate + minimum charge)
//! - The atomically replaceable current-configuration store

pub mod pricing;
pub mod store;

pub use pricing::Quote;
pub use store::ConfigStore;

use crate::config::defaults::*;
use crate::error::Result;
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure for a candidate [`ShippingConfig`]
///
/// Every out-of-range field is reported independently so the admin can fix
/// all of them in one pass.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    #[error("store_lat {0} is out of range [-90, 90]")]
    InvalidLatitude(f64),

    #[error("store_lng {0} is out of range [-180, 180]")]
    InvalidLongitude(f64),

    #[error("free_radius_km {0} must be >= 0")]
    NegativeRadius(f64),

    #[error("price_per_km {0} must be >= 0")]
    NegativeRate(f64),

    #[error("min_shipping_cost {0} must be >= 0")]
    NegativeMinimum(f64),
}

impl ValidationError {
    /// Name of the configuration field this error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidLatitude(_) => "store_lat",
            Self::InvalidLongitude(_) => "store_lng",
            Self::NegativeRadius(_) => "free_radius_km",
            Self::NegativeRate(_) => "price_per_km",
            Self::NegativeMinimum(_) => "min_shipping_cost",
        }
    }
}

/// Shipping pricing configuration
///
/// Immutable once constructed: a new configuration is always built as a
/// whole value and installed via [`ConfigStore::replace`], never patched
/// field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Store latitude
    #[serde(default = "default_store_lat")]
    pub store_lat: f64,

    /// Store longitude
    #[serde(default = "default_store_lng")]
    pub store_lng: f64,

    /// Radius around the store within which delivery is free, in km
    #[serde(default = "default_free_radius_km")]
    pub free_radius_km: f64,

    /// Rate charged per km beyond the free radius
    #[serde(default = "default_price_per_km")]
    pub price_per_km: f64,

    /// Minimum charge for any non-free shipment
    #[serde(default = "default_min_shipping_cost")]
    pub min_shipping_cost: f64,
}

// Default value functions for serde
fn default_store_lat() -> f64 {
    DEFAULT_STORE_LAT
}
fn default_store_lng() -> f64 {
    DEFAULT_STORE_LNG
}
fn default_free_radius_km() -> f64 {
    DEFAULT_FREE_RADIUS_KM
}
fn default_price_per_km() -> f64 {
    DEFAULT_PRICE_PER_KM
}
fn default_min_shipping_cost() -> f64 {
    DEFAULT_MIN_SHIPPING_COST
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            store_lat: default_store_lat(),
            store_lng: default_store_lng(),
            free_radius_km: default_free_radius_km(),
            price_per_km: default_price_per_km(),
            min_shipping_cost: default_min_shipping_cost(),
        }
    }
}

impl ShippingConfig {
    /// The store location as coordinates
    pub fn store_coordinates(&self) -> Coordinates {
        Coordinates::new(self.store_lat, self.store_lng)
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !self.store_lat.is_finite() || self.store_lat < -90.0 || self.store_lat > 90.0 {
            errors.push(ValidationError::InvalidLatitude(self.store_lat));
        }
        if !self.store_lng.is_finite() || self.store_lng < -180.0 || self.store_lng > 180.0 {
            errors.push(ValidationError::InvalidLongitude(self.store_lng));
        }
        if !self.free_radius_km.is_finite() || self.free_radius_km < 0.0 {
            errors.push(ValidationError::NegativeRadius(self.free_radius_km));
        }
        if !self.price_per_km.is_finite() || self.price_per_km < 0.0 {
            errors.push(ValidationError::NegativeRate(self.price_per_km));
        }
        if !self.min_shipping_cost.is_finite() || self.min_shipping_cost < 0.0 {
            errors.push(ValidationError::NegativeMinimum(self.min_shipping_cost));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A destination address supplied at checkout
///
/// Only the coordinates matter to the pricing engine; the postal fields are
/// carried through opaquely for the caller's benefit and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub zip_code: String,

    /// Latitude (required for a shipping quote)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude (required for a shipping quote)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Address {
    /// Extract validated coordinates, failing if they are missing or out of range
    pub fn coordinates(&self) -> Result<Coordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => {
                let coords = Coordinates::new(lat, lng);
                coords.validate()?;
                Ok(coords)
            }
            _ => Err(crate::error::Error::InvalidCoordinates(
                "Address is missing lat/lng coordinates".to_string(),
            )),
        }
    }
}
