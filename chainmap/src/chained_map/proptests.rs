use std::collections::HashMap;
use std::fmt::Debug;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use super::ChainedHashMap;
use crate::config::MapConfig;
use crate::key::MapKey;
use crate::map::Map;

/// Structural checks: placement rule, size bookkeeping, load factor bound
fn assert_invariants<K: MapKey, V>(map: &ChainedHashMap<K, V>) {
    let mut counted = 0;
    for (index, bucket) in map.table.iter().enumerate() {
        for entry in bucket {
            assert_eq!(map.bucket_index(&entry.key), index);
        }
        counted += bucket.len();
    }
    assert_eq!(counted, map.len());
    assert!(map.load_factor() <= map.max_load_factor());
}

/// Put every pair (duplicates included) into both maps and compare
fn check_model<K, V>(pairs: Vec<(K, V)>)
where
    K: MapKey + Clone + Debug,
    V: Clone + PartialEq + Debug,
{
    let mut map = ChainedHashMap::new();
    let mut expected = HashMap::new();

    for (k, v) in pairs {
        assert_eq!(map.put(k.clone(), v.clone()), expected.insert(k, v));
    }

    assert_eq!(map.len(), expected.len());
    for (k, v) in expected.iter() {
        assert_eq!(map.get(k), Some(v), "key: {k:?}");
    }
    assert_eq!(map.iter().count(), expected.len());
    assert_invariants(&map);
}

fn check_prop(hm: HashMap<Vec<u8>, Vec<u8>>) {
    let mut map: ChainedHashMap<Vec<u8>, Vec<u8>> = ChainedHashMap::new();

    // Insert all key-value pairs from the HashMap
    map.put_all(hm.clone());

    assert_eq!(map.len(), hm.len());
    for (k, v) in hm.iter() {
        assert_eq!(map.get(k), Some(v), "key: {k:?}");
    }
    assert_invariants(&map);
}

#[test]
fn it_s_a_hash_map() {
    let small_hash_map_prop = proptest::collection::hash_map(
        proptest::collection::vec(0u8..255, 1..32),
        proptest::collection::vec(0u8..255, 1..32),
        1..250,
    );

    proptest!(|(values in small_hash_map_prop)|{
        check_prop(values);
    });
}

#[test]
fn it_s_a_hash_map_1() {
    let mut expected = HashMap::new();
    expected.insert(vec![225, 211, 10, 64, 102, 152], vec![173, 231, 92]);
    expected.insert(vec![227, 209, 20, 158, 58, 22, 107, 62], vec![77]);
    expected.insert(
        vec![140, 134, 67, 127, 34, 190],
        vec![144, 189, 239, 135, 30],
    );
    expected.insert(vec![206, 143, 221], vec![253, 107, 93, 29, 207]);
    expected.insert(vec![182, 46, 63, 120], vec![110, 233, 124, 103]);
    check_prop(expected);
}

#[test]
fn it_s_a_hash_map_2() {
    // single byte keys across four growths (5 -> 11 -> 23 -> 47 -> 95)
    let expected: HashMap<Vec<u8>, Vec<u8>> = (0u8..40)
        .map(|i| (vec![i.wrapping_mul(37)], vec![i]))
        .collect();
    check_prop(expected);
}

#[test]
fn it_s_a_hash_map_with_small_load_factor() {
    // one key already needs two growths (1 -> 3 -> 7)
    let config = MapConfig::new()
        .with_initial_capacity(1)
        .with_load_factor(0.25);
    let mut map = ChainedHashMap::with_config(config).unwrap();

    map.put(1u32, 1u32);
    assert_eq!(map.capacity(), 7);
    assert_invariants(&map);

    for k in 2..40 {
        map.put(k, k);
        assert_invariants(&map);
    }
    assert_eq!(map.len(), 39);
    for k in 1..40 {
        assert_eq!(map.get(&k), Some(&k));
    }
}

macro_rules! hash_map_prop {
    ($($name:ident: $key:expr => $value:expr),* $(,)?) => {
        paste::paste! {
            $(
                #[test]
                fn [<it_s_a_hash_map_with_ $name _keys>]() {
                    let strategy = proptest::collection::vec(($key, $value), 0..300);
                    proptest!(|(pairs in strategy)| {
                        check_model(pairs);
                    });
                }
            )*
        }
    };
}

hash_map_prop! {
    u64: any::<u64>() => any::<u32>(),
    small_u8: 0u8..16 => any::<i16>(),
    string: "[a-z]{0,8}" => any::<u64>(),
    nullable: proptest::option::of(0u32..64) => any::<u8>(),
    tuple: (0u8..8, any::<bool>()) => ".*",
}

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    #[proptest(weight = 4)]
    Put(#[proptest(strategy = "0u8..32")] u8, u16),
    #[proptest(weight = 2)]
    PutIfAbsent(#[proptest(strategy = "0u8..32")] u8, u16),
    #[proptest(weight = 2)]
    Remove(#[proptest(strategy = "0u8..32")] u8),
    #[proptest(weight = 2)]
    Get(#[proptest(strategy = "0u8..32")] u8),
    Clear,
}

/// Apply `op` through the shared trait and report what the caller observes
fn apply<M: Map<u8, u16>>(map: &mut M, op: &Op) -> (Option<u16>, usize) {
    let seen = match *op {
        Op::Put(k, v) => map.put(k, v),
        Op::PutIfAbsent(k, v) => Some(*map.put_if_absent(k, v)),
        Op::Remove(k) => map.remove(&k),
        Op::Get(k) => map.get(&k).copied(),
        Op::Clear => {
            map.clear();
            None
        }
    };
    (seen, map.len())
}

proptest! {
    #[test]
    fn behaves_like_std_hash_map(ops in proptest::collection::vec(any::<Op>(), 0..400)) {
        let mut map: ChainedHashMap<u8, u16> = ChainedHashMap::new();
        let mut model: HashMap<u8, u16> = HashMap::new();

        for op in &ops {
            let capacity = map.capacity();
            prop_assert_eq!(apply(&mut map, op), apply(&mut model, op), "op: {:?}", op);
            if matches!(op, Op::Clear | Op::Remove(_)) {
                prop_assert_eq!(map.capacity(), capacity);
            }
            assert_invariants(&map);
        }

        for k in 0u8..32 {
            prop_assert_eq!(map.contains_key(&k), model.contains_key(&k));
            prop_assert_eq!(map.get(&k), model.get(&k));
        }
    }

    #[test]
    fn growth_preserves_every_entry(
        capacity in 1usize..20,
        load_factor in 0.25f64..4.0,
        keys in proptest::collection::hash_set(any::<u32>(), 0..200),
    ) {
        let config = MapConfig::new()
            .with_initial_capacity(capacity)
            .with_load_factor(load_factor);
        let mut map = ChainedHashMap::with_config(config).unwrap();

        for &k in &keys {
            let before = map.capacity();
            map.put(k, k.wrapping_add(1));
            let after = map.capacity();

            // zero or more 2n+1 steps
            let mut reachable = before;
            while reachable < after {
                reachable = 2 * reachable + 1;
            }
            prop_assert_eq!(reachable, after);
            assert_invariants(&map);
        }

        prop_assert_eq!(map.len(), keys.len());
        for &k in &keys {
            let expected = k.wrapping_add(1);
            prop_assert_eq!(map.get(&k), Some(&expected));
        }
    }
}
