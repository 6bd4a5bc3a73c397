//! Linear probe walks over the slot array.
//!
//! Both walks start at the key's bucket index and visit slots in order,
//! wrapping at the end of the array. Tombstones never terminate a walk,
//! and every walk is bounded to a single full pass.

use crate::slot::Slot;

/// Where an insertion should land.
pub(crate) enum InsertSite {
    /// A live entry for the key already exists at this index.
    Existing(usize),
    /// No live entry exists; insert at this index (the first tombstone
    /// on the probe path when one exists, otherwise the terminating
    /// empty slot).
    Vacant(usize),
}

/// Find the slot holding a live entry for `key`, starting at `origin`.
///
/// Returns `None` when an empty slot terminates the walk, or when a full
/// pass completes without a match (possible once every slot is occupied
/// or tombstoned).
pub(crate) fn find_live<V>(slots: &[Slot<V>], key: &str, origin: usize) -> Option<usize> {
    let capacity = slots.len();
    let mut index = origin;
    for _ in 0..capacity {
        match &slots[index] {
            Slot::Empty => return None,
            slot if slot.holds(key) => return Some(index),
            _ => {}
        }
        index = (index + 1) % capacity;
    }
    None
}

/// Find the insertion site for `key`, starting at `origin`.
///
/// Remembers the first tombstone on the path; when the walk reaches an
/// empty slot without a live match, that tombstone (if any) is reclaimed
/// instead of consuming the empty slot.
///
/// Panics if a full pass finds neither a match nor a vacant slot. The
/// growth policy keeps the array below full occupation, so the walk
/// always terminates earlier.
pub(crate) fn find_insert_site<V>(slots: &[Slot<V>], key: &str, origin: usize) -> InsertSite {
    let capacity = slots.len();
    let mut index = origin;
    let mut first_tombstone = None;
    for _ in 0..capacity {
        match &slots[index] {
            Slot::Empty => return InsertSite::Vacant(first_tombstone.unwrap_or(index)),
            Slot::Deleted => {
                if first_tombstone.is_none() {
                    first_tombstone = Some(index);
                }
            }
            slot if slot.holds(key) => return InsertSite::Existing(index),
            Slot::Occupied { .. } => {}
        }
        index = (index + 1) % capacity;
    }
    match first_tombstone {
        Some(index) => InsertSite::Vacant(index),
        None => unreachable!("probe walk wrapped a fully occupied array"),
    }
}
