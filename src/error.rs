//! Insertion error taxonomy.

use thiserror::Error;

/// Errors reported by [`OaHashMap::insert`](crate::OaHashMap::insert).
///
/// Every variant leaves the map exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// Keys must be non-empty strings.
    #[error("key must be a non-empty string")]
    EmptyKey,

    /// Doubling the slot array would overflow the addressable size.
    #[error("cannot grow slot array: capacity would overflow")]
    CapacityOverflow,
}
