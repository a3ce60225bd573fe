#![cfg(test)]

// Property tests for WordTable kept inside the crate so they can observe
// slot placement alongside the public surface.

use crate::config::TableConfig;
use crate::fnv::{BuildFnv1a32, BuildFnv1a64};
use crate::view::StrView;
use crate::word_table::{InsertOutcome, WordTable};
use proptest::prelude::*;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations so shrinking moves toward earlier, shorter keys.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i64),
    InsertGrowing(usize, i64),
    Get(usize),
    Miss(String),
    Expand,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (2usize..=8, proptest::collection::vec("[a-z]{1,6}", 1..=24)).prop_flat_map(|(cap, pool)| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            (idx.clone(), any::<i64>()).prop_map(|(i, v)| Op::Insert(i, v)),
            (idx.clone(), any::<i64>()).prop_map(|(i, v)| Op::InsertGrowing(i, v)),
            idx.clone().prop_map(Op::Get),
            "[A-Z]{1,4}".prop_map(Op::Miss),
            Just(Op::Expand),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std HashMap (first insert wins).
// Invariants exercised across random operation sequences:
// - Duplicates leave count and value untouched.
// - `get` agrees with the model for present and absent keys.
// - `expand` preserves count and contents; capacity only grows.
// - `insert_growing` keeps the load at or under the threshold.
// - `iter` yields exactly the model's entries.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        let config = TableConfig::with_capacity(cap);
        let mut sut: WordTable<'_> = WordTable::with_config(config).unwrap();
        let mut model: HashMap<&[u8], i64, BuildFnv1a64> = HashMap::with_hasher(BuildFnv1a64);

        for op in ops {
            let cap_before = sut.capacity();
            match op {
                Op::Insert(i, v) => {
                    let key = StrView::from(pool[i].as_str());
                    let present = model.contains_key(key.as_bytes());
                    if !present && sut.len() == sut.capacity() {
                        // Precondition of raw insert: headroom for an absent key.
                        sut.expand().unwrap();
                    }
                    let out = sut.insert(key, v);
                    prop_assert_eq!(out.is_inserted(), !present);
                    model.entry(key.as_bytes()).or_insert(v);
                }
                Op::InsertGrowing(i, v) => {
                    let key = StrView::from(pool[i].as_str());
                    let present = model.contains_key(key.as_bytes());
                    let must_grow = !present && sut.needs_expand();
                    let out = sut.insert_growing(key, v).unwrap();
                    match out {
                        InsertOutcome::Inserted { .. } => prop_assert!(!present),
                        InsertOutcome::Duplicate { index } => {
                            prop_assert!(present);
                            prop_assert_eq!(sut.slot_of(key), Some(index));
                        }
                    }
                    prop_assert_eq!(sut.capacity() > cap_before, must_grow);
                    if must_grow {
                        prop_assert!(sut.load_factor() <= config.load_factor);
                    }
                    model.entry(key.as_bytes()).or_insert(v);
                }
                Op::Get(i) => {
                    let key = StrView::from(pool[i].as_str());
                    prop_assert_eq!(sut.get(key), model.get(key.as_bytes()));
                }
                Op::Miss(s) => {
                    prop_assert_eq!(sut.get(StrView::from(s.as_str())), None);
                }
                Op::Expand => {
                    let before = sut.len();
                    sut.expand().unwrap();
                    prop_assert_eq!(sut.capacity(), cap_before * 2);
                    prop_assert_eq!(sut.len(), before);
                }
            }

            prop_assert!(sut.capacity() >= cap_before);
            prop_assert!(sut.len() <= sut.capacity());
            prop_assert_eq!(sut.len(), model.len());
        }

        let mut seen: Vec<(&[u8], i64)> = sut.iter().map(|(k, v)| (k.as_bytes(), *v)).collect();
        let mut expected: Vec<(&[u8], i64)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        seen.sort();
        expected.sort();
        prop_assert_eq!(seen, expected);
    }
}

// Property: linear probing leaves no gap between a key's home bucket and the
// slot it finally occupies.
proptest! {
    #[test]
    fn prop_slot_on_probe_path(keys in proptest::collection::hash_set("[a-z0-9]{1,8}", 1..40)) {
        let mut t: WordTable<'_> = WordTable::with_config(TableConfig::with_capacity(4)).unwrap();
        for k in &keys {
            t.insert_growing(StrView::from(k.as_str()), 0).unwrap();
        }
        let cap = t.capacity();
        for k in &keys {
            let key = StrView::from(k.as_str());
            let mut hasher = BuildFnv1a32.build_hasher();
            hasher.write(key.as_bytes());
            let home = hasher.digest() as usize % cap;
            prop_assert_eq!(home, key.hash32() as usize % cap);
            let slot = t.slot_of(key).unwrap();
            let distance = (slot + cap - home) % cap;
            let path: Vec<usize> = (0..distance).map(|d| (home + d) % cap).collect();
            let occupied: Vec<usize> = path
                .iter()
                .copied()
                .filter(|&i| t.is_occupied(i))
                .collect();
            prop_assert_eq!(occupied, path);
        }
    }
}
