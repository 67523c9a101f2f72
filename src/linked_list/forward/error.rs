use alloc::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the fallible (`try_*`) list operations.
///
/// Misuse such as popping an empty list or passing a stale cursor is not an
/// error value; those operations panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// The node storage could not grow.
    #[error("failed to allocate a list node: {0}")]
    Alloc(#[from] TryReserveError),
}
