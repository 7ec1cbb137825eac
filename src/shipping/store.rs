//! Current-configuration store
//!
//! Holds the single process-wide shipping configuration behind an atomic
//! pointer swap. Readers take whole-value snapshots without locking;
//! a replace validates the candidate off to the side and installs it in
//! one indivisible step, so no request ever observes a half-written
//! configuration. Concurrent replaces are last-write-wins.

use crate::error::{Error, Result};
use crate::shipping::ShippingConfig;
use arc_swap::ArcSwap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Store for the currently active [`ShippingConfig`]
pub struct ConfigStore {
    current: ArcSwap<ShippingConfig>,
    /// Where successful replacements are persisted; in-memory when None
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Create an in-memory store (no persistence); used by tests and
    /// one-off CLI invocations
    pub fn new(initial: ShippingConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial),
            path: None,
        }
    }

    /// Open a file-backed store
    ///
    /// Loads the persisted configuration if the file exists, otherwise
    /// starts from defaults (the file is only written on the first
    /// successful replace).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let initial = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read shipping config: {}", e))
            })?;
            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse shipping config: {}", e))
            })?
        } else {
            ShippingConfig::default()
        };

        Ok(Self {
            current: ArcSwap::from_pointee(initial),
            path: Some(path),
        })
    }

    /// Take a snapshot of the current configuration
    ///
    /// The returned value is fully independent of any later replace: a
    /// request that holds it sees one consistent configuration end to end.
    pub fn get(&self) -> Arc<ShippingConfig> {
        self.current.load_full()
    }

    /// Validate and atomically install a new configuration
    ///
    /// All-or-nothing: on any validation (or persistence) failure the
    /// previous configuration remains current and is never partially
    /// overwritten. Returns the newly installed configuration on success.
    pub fn replace(&self, candidate: ShippingConfig) -> Result<Arc<ShippingConfig>> {
        if let Err(errors) = candidate.validate() {
            return Err(Error::InvalidShippingConfig(errors));
        }

        // Persist before the swap: a write failure must leave the
        // in-memory configuration untouched as well.
        if let Some(path) = &self.path {
            persist(path, &candidate)?;
        }

        let installed = Arc::new(candidate);
        self.current.store(Arc::clone(&installed));
        Ok(installed)
    }
}

/// Write the configuration record to disk as TOML
fn persist(path: &Path, config: &ShippingConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| {
        Error::Config(format!("Failed to serialize shipping config: {}", e))
    })?;

    fs::write(path, content).map_err(|e| {
        Error::Config(format!("Failed to write shipping config: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipping::ValidationError;
    use tempfile::TempDir;

    #[test]
    fn test_get_returns_initial_config() {
        let store = ConfigStore::new(ShippingConfig::default());
        let config = store.get();

        assert_eq!(*config, ShippingConfig::default());
    }

    #[test]
    fn test_replace_installs_new_config() {
        let store = ConfigStore::new(ShippingConfig::default());

        let candidate = ShippingConfig {
            free_radius_km: 10.0,
            price_per_km: 2.0,
            ..ShippingConfig::default()
        };

        let installed = store.replace(candidate.clone()).unwrap();
        assert_eq!(*installed, candidate);
        assert_eq!(*store.get(), candidate);
    }

    #[test]
    fn test_replace_rejects_negative_radius() {
        let store = ConfigStore::new(ShippingConfig::default());

        let candidate = ShippingConfig {
            free_radius_km: -1.0,
            ..ShippingConfig::default()
        };

        let err = store.replace(candidate).unwrap_err();
        match err {
            Error::InvalidShippingConfig(errors) => {
                assert_eq!(errors, vec![ValidationError::NegativeRadius(-1.0)]);
            }
            other => panic!("unexpected error: {}", other),
        }

        // Prior configuration remains current
        assert_eq!(*store.get(), ShippingConfig::default());
    }

    #[test]
    fn test_replace_rejects_every_invalid_field() {
        let store = ConfigStore::new(ShippingConfig::default());

        let invalid_configs = [
            ShippingConfig { store_lat: 95.0, ..ShippingConfig::default() },
            ShippingConfig { store_lng: 200.0, ..ShippingConfig::default() },
            ShippingConfig { free_radius_km: -0.1, ..ShippingConfig::default() },
            ShippingConfig { price_per_km: -1.5, ..ShippingConfig::default() },
            ShippingConfig { min_shipping_cost: -10.0, ..ShippingConfig::default() },
        ];

        for candidate in invalid_configs {
            assert!(store.replace(candidate).is_err());
            assert_eq!(*store.get(), ShippingConfig::default());
        }
    }

    #[test]
    fn test_snapshot_is_independent_of_later_replace() {
        let store = ConfigStore::new(ShippingConfig::default());
        let snapshot = store.get();

        store
            .replace(ShippingConfig {
                free_radius_km: 50.0,
                ..ShippingConfig::default()
            })
            .unwrap();

        // The held snapshot still carries the old values
        assert_eq!(snapshot.free_radius_km, 5.0);
        assert_eq!(store.get().free_radius_km, 50.0);
    }

    #[test]
    fn test_last_replace_wins() {
        let store = ConfigStore::new(ShippingConfig::default());

        for radius in [6.0, 7.0, 8.0] {
            store
                .replace(ShippingConfig {
                    free_radius_km: radius,
                    ..ShippingConfig::default()
                })
                .unwrap();
        }

        assert_eq!(store.get().free_radius_km, 8.0);
    }

    #[test]
    fn test_readers_always_see_a_whole_config() {
        // Writers swap configs whose fields all share one value; any torn
        // read would show mixed values.
        let store = Arc::new(ConfigStore::new(ShippingConfig {
            store_lat: 0.0,
            store_lng: 0.0,
            free_radius_km: 0.0,
            price_per_km: 0.0,
            min_shipping_cost: 0.0,
        }));

        let writer = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for i in 1..=500u32 {
                    let v = f64::from(i % 80);
                    store
                        .replace(ShippingConfig {
                            store_lat: v,
                            store_lng: v,
                            free_radius_km: v,
                            price_per_km: v,
                            min_shipping_cost: v,
                        })
                        .unwrap();
                }
            })
        };

        for _ in 0..500 {
            let c = store.get();
            assert_eq!(c.store_lat, c.store_lng);
            assert_eq!(c.store_lat, c.free_radius_km);
            assert_eq!(c.store_lat, c.price_per_km);
            assert_eq!(c.store_lat, c.min_shipping_cost);
        }

        writer.join().unwrap();
    }

    #[test]
    fn test_open_without_file_starts_from_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipping.toml");

        let store = ConfigStore::open(&path).unwrap();
        assert_eq!(*store.get(), ShippingConfig::default());
        // Nothing written until a replace succeeds
        assert!(!path.exists());
    }

    #[test]
    fn test_replace_persists_and_reopens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipping.toml");

        let candidate = ShippingConfig {
            free_radius_km: 12.5,
            min_shipping_cost: 8.0,
            ..ShippingConfig::default()
        };

        let store = ConfigStore::open(&path).unwrap();
        store.replace(candidate.clone()).unwrap();
        assert!(path.exists());

        let reopened = ConfigStore::open(&path).unwrap();
        assert_eq!(*reopened.get(), candidate);
    }

    #[test]
    fn test_failed_replace_does_not_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipping.toml");

        let store = ConfigStore::open(&path).unwrap();
        let bad = ShippingConfig {
            price_per_km: -1.0,
            ..ShippingConfig::default()
        };

        assert!(store.replace(bad).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shipping.toml");
        fs::write(&path, "not valid toml {{{").unwrap();

        assert!(ConfigStore::open(&path).is_err());
    }
}
