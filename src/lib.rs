//! oa-hashmap: a single-threaded, string-keyed map using open addressing
//! with linear probing over one contiguous slot array.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build OaHashMap in small, verifiable layers so each piece can
//!   be reasoned about independently.
//! - Layers:
//!   - fnv: FNV-1a (32-bit) hashing of key bytes reduced to a bucket
//!     index; deterministic, allocation-free, platform-independent.
//!   - slot: tagged `Slot<V>` cells: `Empty`, `Deleted` (tombstone),
//!     `Occupied { key, value }`. The tombstone keeps probe chains
//!     intact after removals.
//!   - probe: linear probe walks over the slot array. Lookup treats
//!     tombstones as transparent; insertion reclaims the first tombstone
//!     on its path. Every walk is bounded to one full pass.
//!   - table: OaHashMap<V>, the lifecycle and resize controller that
//!     owns the slot array and the live-entry counter and exposes the
//!     public API.
//!
//! Constraints
//! - Single-threaded: mutation requires `&mut self`; there is no
//!   internal locking. Concurrent access from multiple threads needs an
//!   external mutual-exclusion wrapper (e.g. `Mutex<OaHashMap<V>>`).
//! - Keys are non-empty strings; the map stores an owned copy per entry,
//!   allocated only when a fresh entry is created.
//! - Values are moved into the map and moved back out by `remove`; the
//!   map never inspects or clones them.
//! - Growth only: the slot array doubles when the load factor would pass
//!   0.7 and never shrinks, so alternating insert/delete workloads do
//!   not oscillate.
//!
//! Why this split?
//! - Localize invariants: hashing, probing, and lifecycle each have a
//!   small, precise contract that can be tested in isolation.
//! - The probe walks are pure functions over `&[Slot<V>]`, so rehashing
//!   reuses the exact same code path as live insertion.
//!
//! Growth and consistency
//! - The growth check runs before each insert against
//!   `(live + 1) / capacity`, so the triggering insert always lands in
//!   the grown array and the array always keeps probe headroom.
//! - A failed grow (capacity overflow) fails the pending insert and
//!   leaves the map in its prior state; there is no partially migrated
//!   state observable at any point.
//!
//! Notes and non-goals
//! - Iteration order is unspecified and may change across grows.
//! - No shrink policy, no persistence, no non-string keys.
//! - Teardown is `Drop`; remaining keys and values are dropped with the
//!   slot array.

mod error;
mod fnv;
mod probe;
mod slot;
mod table;
mod table_proptest;

// Public surface
pub use error::InsertError;
pub use table::{Iter, IterMut, OaHashMap};
