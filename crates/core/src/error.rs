//! Error types for order calculation and pack storage.

use thiserror::Error;

/// Result type alias using the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the calculator and the storage components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The catalog held no packs when an order was calculated.
    #[error("no packs available")]
    NoPacksAvailable,

    /// Requested item count must be at least 1.
    #[error("invalid amount: {0} items requested")]
    InvalidQuantity(u64),

    /// Pack sizes must be at least 1 item.
    #[error("invalid pack size: {0}")]
    InvalidPackSize(u64),

    /// No pack with this amount exists in the catalog.
    #[error("pack not found: {0}")]
    PackNotFound(u64),

    /// A pack with this amount already exists in the catalog.
    #[error("pack with amount {0} already exists")]
    PackExists(u64),

    /// The catalog is full.
    #[error("soft limit reached, cannot add more than {0} packs")]
    SoftLimitReached(usize),

    /// Internal failure (poisoned lock, arithmetic overflow).
    #[error("internal error: {0}")]
    Internal(String),
}
