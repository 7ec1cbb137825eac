//! Server shared state
//!
//! Holds configuration and shared resources for the HTTP server.

use crate::config::Config;
use crate::shipping::ConfigStore;

/// Shared state for the HTTP server
pub struct AppState {
    /// Application configuration (fixed for the server's lifetime)
    pub config: Config,

    /// The current shipping configuration; the only shared mutable state
    pub store: ConfigStore,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, store: ConfigStore) -> Self {
        Self { config, store }
    }
}
