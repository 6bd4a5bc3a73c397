#![cfg(test)]

// Property tests over OaHashMap internals, kept inside the crate so they
// can inspect the slot array directly.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::fnv;
use crate::probe;
use crate::slot::Slot;
use crate::table::{OaHashMap, LOAD_FACTOR_THRESHOLD};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{1,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Structural invariants checked after every operation:
// - the live counter equals the number of occupied slots and the model size;
// - no key occupies more than one slot;
// - every resident key is reachable by the probe walk from its own origin;
// - the load factor never exceeds the growth threshold.
fn check_structure(m: &OaHashMap<i32>, model: &HashMap<String, i32>) -> Result<(), TestCaseError> {
    let mut occupied = 0usize;
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, slot) in m.slots.iter().enumerate() {
        if let Slot::Occupied { key, value } = slot {
            occupied += 1;
            prop_assert!(
                seen.insert(key.as_str(), index).is_none(),
                "key {key:?} occupies more than one slot"
            );
            prop_assert_eq!(model.get(key.as_str()), Some(value));
            let origin = fnv::bucket_index(key, m.capacity());
            prop_assert_eq!(
                probe::find_live(&m.slots, key, origin),
                Some(index),
                "resident key {:?} not reachable from its origin",
                key
            );
        }
    }
    prop_assert_eq!(occupied, m.len());
    prop_assert_eq!(m.len(), model.len());
    prop_assert!(m.len() as f64 <= LOAD_FACTOR_THRESHOLD * m.capacity() as f64 + 1e-9);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_slot_level_invariants((pool, ops) in arb_scenario()) {
        let mut sut: OaHashMap<i32> = OaHashMap::with_capacity(1);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = &pool[i];
                    let previous = sut.insert(k, v).expect("insert of a non-empty key");
                    prop_assert_eq!(previous, model.insert(k.clone(), v));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(k));
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Contains(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
                }
            }
            check_structure(&sut, &model)?;
        }
    }
}
