//! Background Tasks Module
//!
//! Contains background work that runs alongside the store.
//!
//! # Tasks
//! - Sweep: evicts expired entries at a configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
