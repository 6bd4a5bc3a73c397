//! Tagged slot cells for the open-addressing array.

/// One cell of the slot array.
///
/// `Deleted` is a tombstone: the slot is logically vacant, but a probe
/// walk must continue past it so entries inserted after a collision stay
/// reachable.
#[derive(Debug)]
pub(crate) enum Slot<V> {
    Empty,
    Deleted,
    Occupied { key: String, value: V },
}

impl<V> Slot<V> {
    /// True when this slot holds a live entry for `key`.
    pub(crate) fn holds(&self, key: &str) -> bool {
        matches!(self, Slot::Occupied { key: resident, .. } if resident == key)
    }
}
