//! TTL Store - An in-memory key-value cache with time-to-live expiry
//!
//! Every entry carries an absolute expiry deadline. Lookups never return an
//! entry past its deadline; expired entries are reclaimed lazily on read and,
//! optionally, by a periodic background sweep.
//!
//! The store is generic over its value type and hands out clones, so callers
//! never hold references into internal storage. Time is read through an
//! injectable [`Clock`](cache::Clock), which lets tests advance time
//! deterministically instead of sleeping.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio::sync::RwLock;
//! use ttl_store::{spawn_sweep_task, StoreConfig, TtlStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = StoreConfig::default();
//!     let store = Arc::new(RwLock::new(TtlStore::new(&config).unwrap()));
//!
//!     // Sweep unread stale entries in the background; abort on teardown.
//!     let sweeper = spawn_sweep_task(store.clone(), config.sweep_interval);
//!
//!     {
//!         let mut cache = store.write().await;
//!         cache.set("user:42".to_string(), "Ada".to_string(), Some(30)).unwrap();
//!         assert_eq!(cache.get("user:42"), Some("Ada".to_string()));
//!     }
//!
//!     sweeper.abort();
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, Clock, EntryInfo, ManualClock, SystemClock, TtlStore};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use tasks::spawn_sweep_task;
