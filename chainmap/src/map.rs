use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::chained_map::ChainedHashMap;
use crate::key::MapKey;

/// Common associative-array interface.
///
/// Implemented by [`ChainedHashMap`] and by `std::collections::HashMap`, so
/// code (and tests) can drive either one through the same operations.
pub trait Map<K, V> {
    /// Stores `value` under `key`, returning the value it replaced
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Stores `value` only if `key` is absent; returns the value now stored
    fn put_if_absent(&mut self, key: K, value: V) -> &mut V;

    fn get(&self, key: &K) -> Option<&V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    fn contains_key(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `put` every pair of `other`, in its iteration order
    fn put_all<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
        Self: Sized,
    {
        for (key, value) in other {
            self.put(key, value);
        }
    }

    /// `put_if_absent` every pair of `other`, in its iteration order
    fn put_all_if_absent<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
        Self: Sized,
    {
        for (key, value) in other {
            self.put_if_absent(key, value);
        }
    }
}

impl<K: MapKey, V> Map<K, V> for ChainedHashMap<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        ChainedHashMap::put(self, key, value)
    }

    fn put_if_absent(&mut self, key: K, value: V) -> &mut V {
        ChainedHashMap::put_if_absent(self, key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        ChainedHashMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        ChainedHashMap::remove(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        ChainedHashMap::contains_key(self, key)
    }

    fn len(&self) -> usize {
        ChainedHashMap::len(self)
    }

    fn clear(&mut self) {
        ChainedHashMap::clear(self)
    }
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn put_if_absent(&mut self, key: K, value: V) -> &mut V {
        self.entry(key).or_insert(value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}
