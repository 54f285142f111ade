use std::borrow::Borrow;
use std::fmt;
use std::hash::BuildHasher;
use std::mem;

use log::{debug, trace};
use rustc_hash::FxBuildHasher;

use crate::config::MapConfig;
use crate::error::Result;
use crate::key::MapKey;

pub mod entry;
pub mod iter;

#[cfg(test)]
mod proptests;

pub use entry::{MapEntry, OccupiedEntry, VacantEntry};
pub use iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

use entry::Entry;

/// Entries whose keys reduce to the same table index, in insertion order.
/// An unallocated (empty) `Vec` stands for a bucket that was never created.
type Bucket<K, V> = Vec<Entry<K, V>>;

/// Position of a live entry: (bucket index, offset within the bucket)
type Slot = (usize, usize);

/// A hash map resolving collisions by separate chaining.
///
/// The table is an array of buckets, each an ordered list of key-value
/// entries. A key lives in bucket `hash(key) % capacity`, null keys (see
/// [`MapKey::is_null`]) always in bucket 0. After an insertion pushes
/// `len / capacity` above the configured load factor the table is replaced
/// by one of `2 * capacity + 1` buckets and every entry is rehashed into it,
/// repeatedly until the load factor holds.
///
/// The map is single owner: iterators borrow it, so structural mutation
/// while iterating is rejected by the compiler rather than detected at
/// runtime.
#[derive(Clone)]
pub struct ChainedHashMap<K, V> {
    table: Box<[Bucket<K, V>]>,
    size: usize,
    load_factor: f64,
    hasher: FxBuildHasher,
}

impl<K, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_table<K, V>(len: usize) -> Box<[Bucket<K, V>]> {
    (0..len).map(|_| Vec::new()).collect()
}

/// Table index for `key` in a table of `len` buckets. The hash is unsigned,
/// so the remainder is always a valid index.
fn index_for<Q: MapKey + ?Sized>(hasher: &FxBuildHasher, key: &Q, len: usize) -> usize {
    if key.is_null() {
        return 0;
    }
    (hasher.hash_one(key) % len as u64) as usize
}

impl<K, V> ChainedHashMap<K, V> {
    /// Creates an empty map with 5 buckets and a load factor of 0.75
    pub fn new() -> Self {
        Self::from_validated(MapConfig::default())
    }

    /// Creates an empty map with `capacity` buckets, at least one
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_validated(MapConfig::default().with_initial_capacity(capacity.max(1)))
    }

    /// Creates an empty map from an explicit configuration
    pub fn with_config(config: MapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: MapConfig) -> Self {
        trace!(
            "creating chained map with {} buckets, load factor {}",
            config.initial_capacity(),
            config.load_factor()
        );
        Self {
            table: empty_table(config.initial_capacity()),
            size: 0,
            load_factor: config.load_factor(),
            hasher: FxBuildHasher::default(),
        }
    }

    /// Returns the number of key-value pairs in the map
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map contains no elements
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Returns the current fill ratio (len / capacity)
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.table.len() as f64
    }

    /// Returns the fill ratio above which an insertion grows the table
    pub fn max_load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Removes every entry and releases the buckets. The table keeps its
    /// current number of buckets.
    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.size);
        for bucket in self.table.iter_mut() {
            *bucket = Vec::new();
        }
        self.size = 0;
    }

    /// Iterates over `(&K, &V)`, bucket by bucket, each bucket in insertion order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Like [`iter`](Self::iter) but with mutable access to the values
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self)
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self)
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self)
    }

    fn exceeds_load_factor(&self) -> bool {
        self.size as f64 > self.table.len() as f64 * self.load_factor
    }

    fn entry_at(&self, (bucket, pos): Slot) -> &Entry<K, V> {
        &self.table[bucket][pos]
    }

    fn entry_at_mut(&mut self, (bucket, pos): Slot) -> &mut Entry<K, V> {
        &mut self.table[bucket][pos]
    }

    fn take_slot(&mut self, (bucket, pos): Slot) -> (K, V) {
        // `remove`, not `swap_remove`: the rest of the chain keeps its order
        let entry = self.table[bucket].remove(pos);
        self.size -= 1;
        entry.into_parts()
    }
}

impl<K: MapKey, V> ChainedHashMap<K, V> {
    fn bucket_index<Q: MapKey + ?Sized>(&self, key: &Q) -> usize {
        index_for(&self.hasher, key, self.table.len())
    }

    /// Find the slot holding `key`, scanning its bucket linearly
    fn find<Q>(&self, key: &Q) -> Option<Slot>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        let index = self.bucket_index(key);
        self.table[index]
            .iter()
            .position(|entry| entry.key.borrow() == key)
            .map(|pos| (index, pos))
    }

    /// Push an entry known to be absent onto the end of its bucket
    fn place(&mut self, entry: Entry<K, V>) -> Slot {
        let index = self.bucket_index(&entry.key);
        let bucket = &mut self.table[index];
        bucket.push(entry);
        self.size += 1;
        (index, bucket.len() - 1)
    }

    /// Insert a new key, then grow until the load factor holds again.
    /// Returns where the entry ended up.
    fn append(&mut self, key: K, value: V) -> Slot {
        let mut slot = self.place(Entry::new(key, value));
        // a small load factor can need more than one 2n+1 step
        while self.exceeds_load_factor() {
            slot = self.grow(slot);
        }
        slot
    }

    /// Replace the table with one of `2 * capacity + 1` buckets and rehash
    /// every entry into it, old buckets in index order. Returns the new
    /// position of the entry that was at `tracked`.
    fn grow(&mut self, tracked: Slot) -> Slot {
        let old_len = self.table.len();
        let new_len = old_len.saturating_mul(2).saturating_add(1);
        debug!(
            "growing table from {} to {} buckets ({} entries)",
            old_len, new_len, self.size
        );

        let old_table = mem::replace(&mut self.table, empty_table(new_len));
        self.size = 0;

        let mut relocated = tracked;
        for (index, bucket) in old_table.into_vec().into_iter().enumerate() {
            for (pos, entry) in bucket.into_iter().enumerate() {
                let slot = self.place(entry);
                if (index, pos) == tracked {
                    relocated = slot;
                }
            }
        }
        relocated
    }

    /// Insert a key-value pair into the map, returning the previous value if it existed
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.find(&key) {
            Some(slot) => Some(mem::replace(&mut self.entry_at_mut(slot).value, value)),
            None => {
                self.append(key, value);
                None
            }
        }
    }

    /// Inserts `value` only when `key` is absent. Returns the value now
    /// stored under `key`: the existing one, or the one just inserted.
    pub fn put_if_absent(&mut self, key: K, value: V) -> &mut V {
        self.entry(key).or_insert(value)
    }

    /// [`put`](Self::put) every pair of `other`, in `other`'s iteration order
    pub fn put_all<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in other {
            self.put(key, value);
        }
    }

    /// [`put_if_absent`](Self::put_if_absent) every pair of `other`, in
    /// `other`'s iteration order
    pub fn put_all_if_absent<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in other {
            self.put_if_absent(key, value);
        }
    }

    /// Get a value by key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        self.find(key).map(|slot| &self.entry_at(slot).value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        let slot = self.find(key)?;
        Some(&mut self.entry_at_mut(slot).value)
    }

    /// Returns the stored key and value for `key`
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        self.find(key).map(|slot| {
            let entry = self.entry_at(slot);
            (&entry.key, &entry.value)
        })
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Remove `key`, returning its value if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove `key`, returning the stored key and value if it was present
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        let slot = self.find(key)?;
        Some(self.take_slot(slot))
    }

    /// Get an entry for the given key, allowing for efficient insertion/access patterns
    pub fn entry(&mut self, key: K) -> MapEntry<'_, K, V> {
        match self.find(&key) {
            Some(slot) => MapEntry::Occupied(OccupiedEntry::new(self, slot)),
            None => MapEntry::Vacant(VacantEntry::new(self, key)),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ChainedHashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: MapKey, V: PartialEq> PartialEq for ChainedHashMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: MapKey, V: Eq> Eq for ChainedHashMap<K, V> {}

impl<K: MapKey, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.put_all(iter);
        map
    }
}

impl<K: MapKey, V> Extend<(K, V)> for ChainedHashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}
