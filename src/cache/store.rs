//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiry and
//! recency-based eviction at capacity.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, Clock, EntryInfo, SystemClock, MAX_KEY_LENGTH};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

// == TTL Store ==
/// Keyed in-memory storage where every entry expires after its TTL.
///
/// Lookups never return an entry past its deadline: `get` and `take` treat
/// it as absent and reclaim it on the spot. [`TtlStore::sweep`] reclaims
/// entries that expire without ever being read again; it is an optimization,
/// not a correctness requirement. At capacity, inserting a new key pushes
/// out the least recently used entry.
///
/// The store is single-owner. Concurrent callers share it behind
/// `Arc<tokio::sync::RwLock<TtlStore<V>>>` and take the write lock for any
/// operation that touches recency or counters (which includes `get`).
#[derive(Debug)]
pub struct TtlStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in seconds applied when `set` is called without one
    default_ttl: u64,
    /// Injected time source
    clock: Arc<dyn Clock>,
    /// Monotonic counter stamped onto entries on write and read
    ticks: u64,
}

impl<V: Clone> TtlStore<V> {
    // == Constructors ==
    /// Creates a store from the given configuration, on the system clock.
    ///
    /// Rejects a zero `default_ttl` or zero `max_entries` with
    /// [`StoreError::InvalidArgument`].
    pub fn new(config: &StoreConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a store reading time from the supplied clock.
    pub fn with_clock(config: &StoreConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        if config.max_entries == 0 {
            return Err(StoreError::InvalidArgument(
                "max_entries must be at least 1".to_string(),
            ));
        }
        if config.default_ttl == 0 {
            return Err(StoreError::InvalidArgument(
                "default_ttl must be positive".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries: config.max_entries,
            default_ttl: config.default_ttl,
            clock,
            ticks: 0,
        })
    }

    // == Set ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// The deadline becomes `now + ttl`, falling back to the store's default
    /// TTL when none is given; overwriting always resets it. When a new key
    /// arrives at capacity, expired entries are swept first and only if that
    /// frees nothing is the least recently used entry evicted.
    ///
    /// # Errors
    /// [`StoreError::InvalidArgument`] for an empty key, a key longer than
    /// [`MAX_KEY_LENGTH`] bytes, an explicit TTL of zero, or a TTL whose
    /// deadline overflows.
    pub fn set(&mut self, key: String, value: V, ttl: Option<u64>) -> Result<()> {
        if key.is_empty() {
            return Err(StoreError::InvalidArgument(
                "key cannot be empty".to_string(),
            ));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(StoreError::InvalidArgument(format!(
                "key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        let now = self.clock.now_ms();
        let expires_at = self.deadline(now, ttl)?;

        // Make room for a brand-new key at capacity
        let is_overwrite = self.entries.contains_key(&key);
        if !is_overwrite && self.entries.len() >= self.max_entries && self.sweep() == 0 {
            self.evict_lru();
        }

        let tick = self.next_tick();
        self.entries
            .insert(key, CacheEntry::new(value, now, expires_at, tick));
        self.stats.set_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns a copy of the live value for `key`, or `None` on a miss.
    ///
    /// A miss (absent key or elapsed TTL) is a normal outcome, not an error.
    /// Finding an expired entry evicts it immediately to reclaim memory.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            self.stats.set_entries(self.entries.len());
            return None;
        }

        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        entry.touched = tick;
        self.stats.record_hit();
        Some(entry.value.clone())
    }

    // == Take ==
    /// Removes the entry for `key` and returns its live value.
    ///
    /// Hit/miss accounting matches [`TtlStore::get`]; an expired entry is
    /// reclaimed and reported as a miss.
    pub fn take(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.remove(key) {
            Some(entry) if entry.is_expired_at(now) => {
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_entries(self.entries.len());
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                self.stats.set_entries(self.entries.len());
                Some(entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes the entry for `key` unconditionally.
    ///
    /// Returns whether an entry was actually removed; an absent key is not
    /// an error.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.set_entries(self.entries.len());
        }
        removed
    }

    // == Contains ==
    /// Whether a live entry exists for `key`.
    ///
    /// Does not count toward hits or misses and does not evict: an expired
    /// entry reports `false` and is left for `get` or `sweep` to reclaim.
    pub fn contains_key(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .map(|entry| !entry.is_expired_at(now))
            .unwrap_or(false)
    }

    // == Keys ==
    /// Keys of all live entries, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        let now = self.clock.now_ms();
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect()
    }

    // == TTL Queries ==
    /// Remaining lifetime of the live entry for `key`.
    pub fn ttl_remaining(&self, key: &str) -> Option<Duration> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| Duration::from_millis(entry.ttl_remaining_ms(now)))
    }

    /// Re-arms the deadline of the live entry for `key` to `now + ttl_secs`.
    ///
    /// Returns whether an entry was re-armed; `false` when the key is absent
    /// or already expired.
    ///
    /// # Errors
    /// [`StoreError::InvalidArgument`] on a zero or overflowing TTL.
    pub fn set_ttl(&mut self, key: &str, ttl_secs: u64) -> Result<bool> {
        let now = self.clock.now_ms();
        let expires_at = self.deadline(now, Some(ttl_secs))?;

        match self.entries.get_mut(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                entry.expires_at = expires_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Timing snapshot of the live entry for `key`, for diagnostics.
    pub fn entry_info(&self, key: &str) -> Option<EntryInfo> {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| EntryInfo::from_entry(entry, now))
    }

    // == Sweep ==
    /// Evicts every entry past its deadline and returns how many were removed.
    ///
    /// Intended to run on a timer independent of `get`, so entries that are
    /// written but never re-read do not linger in memory.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.stats.record_expirations(removed as u64);
            self.stats.set_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes every entry. Counters are preserved.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_entries(0);
    }

    // == Stats ==
    /// Current performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Number of entries currently stored, expired-but-unreclaimed included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Internals ==
    /// Computes `now + ttl` in milliseconds, validating the TTL.
    fn deadline(&self, now_ms: u64, ttl: Option<u64>) -> Result<u64> {
        let ttl_secs = match ttl {
            Some(0) => {
                return Err(StoreError::InvalidArgument(
                    "ttl must be positive".to_string(),
                ))
            }
            Some(secs) => secs,
            None => self.default_ttl,
        };

        ttl_secs
            .checked_mul(1000)
            .and_then(|ms| now_ms.checked_add(ms))
            .ok_or_else(|| {
                StoreError::InvalidArgument(format!(
                    "ttl of {} seconds overflows the expiry deadline",
                    ttl_secs
                ))
            })
    }

    fn next_tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    /// Removes the least recently touched entry.
    fn evict_lru(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.touched)
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            self.stats.record_eviction();
        }
    }
}
