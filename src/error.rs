use thiserror::Error;

/// The closed error taxonomy for every fallible operation on [`crate::LinkedRing`].
///
/// Every public, fallible operation returns `Result<T, LinkedRingError>`. No
/// variant carries a payload beyond what's needed to explain the failure;
/// callers match on the variant, not on a message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkedRingError {
    /// The caller-supplied backing storage was empty, or the requested size
    /// was zero, at `init` or `resize`.
    #[error("no memory available for the requested arena size")]
    NoMemory,
    /// An insertion could not proceed because the free list is empty (or
    /// would be, once an owner record is also reserved).
    #[error("buffer is full")]
    BufferFull,
    /// A read or removal was attempted for an owner with no record.
    #[error("buffer is empty")]
    BufferEmpty,
    /// An indexed operation targeted past the sub-list's length.
    #[error("index out of range")]
    InvalidIndex,
    /// The caller-supplied lock primitive reported failure.
    #[error("failed to acquire lock")]
    Lock,
    /// The caller-supplied unlock primitive reported failure.
    #[error("failed to release lock")]
    Unlock,
    /// Catch-all for integrity violations surfaced by diagnostics.
    #[error("unknown internal error")]
    Unknown,
}
