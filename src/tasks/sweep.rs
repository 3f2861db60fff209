//! Sweep Task
//!
//! Background task that periodically evicts expired store entries, so that
//! entries written and never re-read do not accumulate until process exit.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlStore;

/// Spawns a background task that periodically sweeps the store.
///
/// The task loops forever, sleeping `interval_secs` between passes and
/// holding the write lock only for the duration of each
/// [`TtlStore::sweep`] call. Sweeping is purely a memory optimization; the
/// store already refuses to return expired entries on its own.
///
/// The returned handle is the teardown mechanism: call
/// [`JoinHandle::abort`] to stop the task when the store is dropped.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(TtlStore::new(&config)?));
/// let sweeper = spawn_sweep_task(store.clone(), config.sweep_interval);
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweep_task<V>(
    store: Arc<RwLock<TtlStore<V>>>,
    interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("starting sweep task with interval of {} seconds", interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut guard = store.write().await;
                guard.sweep()
            };

            if removed > 0 {
                info!("sweep pass evicted {} expired entries", removed);
            } else {
                debug!("sweep pass found no expired entries");
            }
        }
    })
}
