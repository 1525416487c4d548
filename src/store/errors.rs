//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Absent records are not errors; lookups return `Option` or `bool`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A thread panicked while holding the store lock
    #[error("persona store lock poisoned")]
    LockPoisoned,
}
