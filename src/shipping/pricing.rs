//! Shipping cost calculation
//!
//! Pure pricing policy: free inside the configured radius (inclusive),
//! per-kilometer beyond it with a minimum charge. All policy lives in the
//! configuration; this module adds no floor or cap of its own.

use crate::constants::geo::COST_DECIMALS;
use crate::geo::round_km;
use crate::shipping::ShippingConfig;
use serde::{Deserialize, Serialize};

/// A shipping quote for a single destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Distance from the store in km, rounded to 3 decimal places
    pub distance_km: f64,

    /// Whether delivery is free (destination within the free radius)
    pub is_free: bool,

    /// Cost of the shipment; always 0 when `is_free`
    pub shipping_cost: f64,

    /// Human-readable summary. Informational only: derived entirely from
    /// the other fields and the configuration, never used in decisions.
    pub message: String,
}

/// Compute a quote for a shipment over `distance_km` under `config`
///
/// The free boundary is inclusive: a destination exactly at the radius
/// ships free. Beyond it, only the kilometers past the radius are charged,
/// floored at `min_shipping_cost`.
///
/// Pure function: same inputs always produce the same quote.
pub fn quote(distance_km: f64, config: &ShippingConfig) -> Quote {
    // Price on the rounded distance so the quote is consistent with its
    // own distance_km field at the radius boundary.
    let distance_km = round_km(distance_km);

    if distance_km <= config.free_radius_km {
        return Quote {
            distance_km,
            is_free: true,
            shipping_cost: 0.0,
            message: format!("Envío gratis (dentro de {}km)", config.free_radius_km),
        };
    }

    let extra_km = distance_km - config.free_radius_km;
    let raw_cost = extra_km * config.price_per_km;
    let shipping_cost = round_cost(raw_cost.max(config.min_shipping_cost));

    Quote {
        distance_km,
        is_free: false,
        shipping_cost,
        message: format!(
            "Costo de envío: ${:.2} ({:.1}km)",
            shipping_cost, distance_km
        ),
    }
}

/// Round a monetary amount to 2 decimal places
fn round_cost(cost: f64) -> f64 {
    let factor = 10f64.powi(COST_DECIMALS as i32);
    (cost * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The configuration from the reference scenarios: Lima store, 5 km
    /// free radius, 1.50 per km, 5.00 minimum.
    fn scenario_config() -> ShippingConfig {
        ShippingConfig::default()
    }

    #[test]
    fn test_destination_at_store_is_free() {
        let quote = quote(0.0, &scenario_config());

        assert_eq!(quote.distance_km, 0.0);
        assert!(quote.is_free);
        assert_eq!(quote.shipping_cost, 0.0);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // Exactly at the radius ships free
        let quote = quote(5.0, &scenario_config());

        assert!(quote.is_free);
        assert_eq!(quote.shipping_cost, 0.0);
    }

    #[test]
    fn test_just_past_boundary_is_paid() {
        let quote = quote(5.001, &scenario_config());

        assert!(!quote.is_free);
        assert!(quote.shipping_cost >= scenario_config().min_shipping_cost);
    }

    #[test]
    fn test_per_km_rate_beyond_radius() {
        // 10 km: (10 - 5) * 1.50 = 7.50, above the minimum
        let quote = quote(10.0, &scenario_config());

        assert!(!quote.is_free);
        assert_eq!(quote.shipping_cost, 7.50);
    }

    #[test]
    fn test_minimum_charge_floor() {
        // 5.5 km: raw cost 0.5 * 1.50 = 0.75, floored to 5.00
        let quote = quote(5.5, &scenario_config());

        assert!(!quote.is_free);
        assert_eq!(quote.shipping_cost, 5.00);
    }

    #[test]
    fn test_zero_minimum_allows_tiny_costs() {
        let config = ShippingConfig {
            min_shipping_cost: 0.0,
            ..scenario_config()
        };

        let quote = quote(5.1, &config);
        assert!(!quote.is_free);
        // 0.1 * 1.50 = 0.15
        assert_eq!(quote.shipping_cost, 0.15);
    }

    #[test]
    fn test_zero_rate_charges_exactly_the_minimum() {
        let config = ShippingConfig {
            price_per_km: 0.0,
            ..scenario_config()
        };

        for distance in [5.1, 20.0, 500.0] {
            let q = quote(distance, &config);
            assert!(!q.is_free);
            assert_eq!(q.shipping_cost, config.min_shipping_cost);
        }
    }

    #[test]
    fn test_zero_rate_and_zero_minimum() {
        // A paid shipment can legitimately cost 0: is_free stays false
        let config = ShippingConfig {
            price_per_km: 0.0,
            min_shipping_cost: 0.0,
            ..scenario_config()
        };

        let q = quote(12.0, &config);
        assert!(!q.is_free);
        assert_eq!(q.shipping_cost, 0.0);
    }

    #[test]
    fn test_zero_radius_everything_past_store_is_paid() {
        let config = ShippingConfig {
            free_radius_km: 0.0,
            ..scenario_config()
        };

        assert!(quote(0.0, &config).is_free);
        assert!(!quote(0.001, &config).is_free);
    }

    #[test]
    fn test_quote_is_deterministic() {
        let config = scenario_config();

        let a = quote(7.345, &config);
        let b = quote(7.345, &config);

        assert_eq!(a, b);
        assert_eq!(a.message, b.message);
    }

    #[test]
    fn test_free_invariant_implies_zero_cost() {
        let config = scenario_config();

        for distance in [0.0, 1.0, 2.5, 4.999, 5.0] {
            let q = quote(distance, &config);
            assert!(q.is_free, "distance {} should be free", distance);
            assert_eq!(q.shipping_cost, 0.0);
        }
    }

    #[test]
    fn test_messages() {
        let config = scenario_config();

        let free = quote(2.0, &config);
        assert_eq!(free.message, "Envío gratis (dentro de 5km)");

        let paid = quote(10.0, &config);
        assert_eq!(paid.message, "Costo de envío: $7.50 (10.0km)");
    }

    #[test]
    fn test_distance_is_rounded_to_three_decimals() {
        let q = quote(7.1234567, &scenario_config());
        assert_eq!(q.distance_km, 7.123);
    }

    #[test]
    fn test_cost_is_rounded_to_two_decimals() {
        // 5.333 km -> 0.333 * 1.50 = 0.4995, floored to 5.00 anyway;
        // use a zero minimum so the rounding is visible
        let config = ShippingConfig {
            min_shipping_cost: 0.0,
            ..scenario_config()
        };

        let q = quote(5.333, &config);
        assert_eq!(q.shipping_cost, 0.5);
    }
}
