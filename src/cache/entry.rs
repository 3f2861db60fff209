//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their expiry
//! metadata. Entries never consult the wall clock themselves; every expiry
//! check takes "now" as an argument so the time source stays injectable.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Entry ==
/// A stored value together with its expiry metadata.
///
/// The value type is opaque to the store; callers get clones back, never
/// references into the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Write timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Deadline (Unix milliseconds) after which the entry is treated as absent
    pub expires_at: u64,
    /// Recency stamp used for eviction at capacity
    pub(crate) touched: u64,
}

impl<V> CacheEntry<V> {
    /// Creates an entry written at `now_ms` that expires at `expires_at_ms`.
    pub(crate) fn new(value: V, now_ms: u64, expires_at_ms: u64, tick: u64) -> Self {
        Self {
            value,
            stored_at: now_ms,
            expires_at: expires_at_ms,
            touched: tick,
        }
    }

    // == Is Expired ==
    /// Whether the entry has expired as of `now_ms`.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its deadline, so the instant the TTL has
    /// fully elapsed the entry is already gone.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds as of `now_ms`; zero once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }
}

// == Entry Info ==
/// Human-facing snapshot of a single entry's timing, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct EntryInfo {
    /// When the entry was written
    pub stored_at: DateTime<Utc>,
    /// When the entry stops being returned by lookups
    pub expires_at: DateTime<Utc>,
    /// Whole seconds of lifetime left at snapshot time
    pub ttl_remaining_secs: u64,
}

impl EntryInfo {
    /// Builds a snapshot for an entry observed at `now_ms`.
    pub(crate) fn from_entry<V>(entry: &CacheEntry<V>, now_ms: u64) -> Self {
        Self {
            stored_at: ms_to_datetime(entry.stored_at),
            expires_at: ms_to_datetime(entry.expires_at),
            ttl_remaining_secs: entry.ttl_remaining_ms(now_ms) / 1000,
        }
    }
}

/// Converts Unix milliseconds to a UTC datetime.
///
/// Out-of-range inputs (hundreds of millennia away) collapse to the epoch
/// rather than failing a diagnostic call.
fn ms_to_datetime(ms: u64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms as i64).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
