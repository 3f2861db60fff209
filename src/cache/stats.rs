//! Cache Statistics Module
//!
//! Tracks store performance counters: hits, misses, TTL expirations, and
//! capacity evictions.

use serde::Serialize;

// == Cache Stats ==
/// Store performance counters.
///
/// `expirations` counts entries reclaimed because their TTL elapsed (lazily
/// on read or during a sweep); `evictions` counts entries pushed out to make
/// room at capacity. Serializable so callers can embed a snapshot in their
/// own telemetry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a live value
    pub hits: u64,
    /// Lookups that found nothing (absent or expired)
    pub misses: u64,
    /// Entries reclaimed because their TTL elapsed
    pub expirations: u64,
    /// Entries removed to make room at capacity
    pub evictions: u64,
    /// Number of entries currently stored
    pub entries: usize,
}

impl CacheStats {
    /// Creates a CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Fraction of lookups that hit, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_expirations(&mut self, count: u64) {
        self.expirations += count;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}
