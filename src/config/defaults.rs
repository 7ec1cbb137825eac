//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default store latitude (Lima flagship store)
pub const DEFAULT_STORE_LAT: f64 = -12.1190285;

/// Default store longitude
pub const DEFAULT_STORE_LNG: f64 = -77.0349915;

/// Default free-shipping radius in km
pub const DEFAULT_FREE_RADIUS_KM: f64 = 5.0;

/// Default rate per km beyond the free radius
pub const DEFAULT_PRICE_PER_KM: f64 = 1.50;

/// Default minimum charge for non-free shipments
pub const DEFAULT_MIN_SHIPPING_COST: f64 = 5.0;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8710;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Persisted shipping configuration file name (the single settings record)
pub const SHIPPING_FILE_NAME: &str = "shipping.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "tarifador";
