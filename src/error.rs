//! Error types for the TTL store
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the TTL store.
///
/// Misses and absent keys are not errors; they surface as `None` from the
/// lookup operations. The only failure mode is a caller handing the store
/// an argument it cannot use.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unusable key or TTL supplied by the caller
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// == Result Type Alias ==
/// Convenience Result type for the TTL store.
pub type Result<T> = std::result::Result<T, StoreError>;
