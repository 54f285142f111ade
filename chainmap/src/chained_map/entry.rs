use std::mem;

use crate::key::MapKey;

use super::{ChainedHashMap, Slot};

/// A key-value pair stored in a bucket. The key never changes once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub(crate) fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Entry API for the ChainedHashMap, similar to std::collections::HashMap
pub enum MapEntry<'a, K, V> {
    Occupied(OccupiedEntry<'a, K, V>),
    Vacant(VacantEntry<'a, K, V>),
}

/// A view into an occupied entry in the map
pub struct OccupiedEntry<'a, K, V> {
    map: &'a mut ChainedHashMap<K, V>,
    slot: Slot,
}

/// A view into a vacant entry in the map
pub struct VacantEntry<'a, K, V> {
    map: &'a mut ChainedHashMap<K, V>,
    key: K,
}

impl<'a, K: MapKey, V> MapEntry<'a, K, V> {
    /// Returns true if the entry is occupied
    pub fn is_occupied(&self) -> bool {
        matches!(self, MapEntry::Occupied(_))
    }

    /// Returns true if the entry is vacant
    pub fn is_vacant(&self) -> bool {
        matches!(self, MapEntry::Vacant(_))
    }

    pub fn key(&self) -> &K {
        match self {
            MapEntry::Occupied(entry) => entry.key(),
            MapEntry::Vacant(entry) => entry.key(),
        }
    }

    /// Insert `default` if the entry is vacant, then return the stored value
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Insert the value returned by the closure if the entry is vacant
    pub fn or_insert_with<F>(self, f: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            MapEntry::Occupied(entry) => entry.into_mut(),
            MapEntry::Vacant(entry) => entry.insert(f()),
        }
    }

    /// Run `f` on the stored value if the entry is occupied
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let MapEntry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub(super) fn new(map: &'a mut ChainedHashMap<K, V>, slot: Slot) -> Self {
        Self { map, slot }
    }

    /// Get a reference to the key in the entry
    pub fn key(&self) -> &K {
        &self.map.entry_at(self.slot).key
    }

    /// Get a reference to the value in the entry
    pub fn get(&self) -> &V {
        &self.map.entry_at(self.slot).value
    }

    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.entry_at_mut(self.slot).value
    }

    /// Converts the entry into a mutable reference bound to the map's borrow
    pub fn into_mut(self) -> &'a mut V {
        let Self { map, slot } = self;
        &mut map.entry_at_mut(slot).value
    }

    /// Insert a new value into the entry, returning the old value
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Remove the entry from the map, returning its value
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Remove the entry from the map, returning the stored key and value
    pub fn remove_entry(self) -> (K, V) {
        self.map.take_slot(self.slot)
    }
}

impl<'a, K: MapKey, V> VacantEntry<'a, K, V> {
    pub(super) fn new(map: &'a mut ChainedHashMap<K, V>, key: K) -> Self {
        Self { map, key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take back ownership of the key
    pub fn into_key(self) -> K {
        self.key
    }

    /// Insert the value into the vacant entry, returning a reference to the
    /// inserted value. May grow the table exactly as `put` would.
    pub fn insert(self, value: V) -> &'a mut V {
        let Self { map, key } = self;
        let slot = map.append(key, value);
        &mut map.entry_at_mut(slot).value
    }
}
