//! Configuration Module
//!
//! Handles loading and managing store configuration from environment variables.

use std::env;

/// Store configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The configuration is injected into [`TtlStore::new`], never
/// read from global state.
///
/// [`TtlStore::new`]: crate::TtlStore::new
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of entries the store can hold
    pub max_entries: usize,
    /// Default TTL in seconds for entries set without an explicit TTL
    pub default_ttl: u64,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
}

impl StoreConfig {
    /// Creates a new StoreConfig by loading values from environment variables.
    ///
    /// Unset or unparseable variables fall back to the defaults.
    ///
    /// # Environment Variables
    /// - `TTL_STORE_MAX_ENTRIES` - Maximum entry count (default: 1000)
    /// - `TTL_STORE_DEFAULT_TTL` - Default TTL in seconds (default: 60)
    /// - `TTL_STORE_SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("TTL_STORE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            default_ttl: env::var("TTL_STORE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            sweep_interval: env::var("TTL_STORE_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            default_ttl: 60,
            sweep_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.sweep_interval, 60);
    }

    // Single test for env handling: the test runner is parallel and these
    // variables are process-global state.
    #[test]
    fn test_config_from_env() {
        env::remove_var("TTL_STORE_MAX_ENTRIES");
        env::remove_var("TTL_STORE_DEFAULT_TTL");
        env::remove_var("TTL_STORE_SWEEP_INTERVAL");

        let config = StoreConfig::from_env();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.sweep_interval, 60);

        // Unparseable values fall back to defaults too
        env::set_var("TTL_STORE_DEFAULT_TTL", "not-a-number");
        assert_eq!(StoreConfig::from_env().default_ttl, 60);
        env::remove_var("TTL_STORE_DEFAULT_TTL");
    }
}
