/*!
# Separate Chaining

Every slot of the table owns a bucket, an [`ArrayList`] of `(key, value)` entries.
Lookups hash to a single bucket and scan it linearly.
*/

use std::hash::{BuildHasher, Hash};

use tracing::debug;

use super::*;
use crate::{seq::Sequence, testing::test_symbol_table};

/// Hash table resolving collisions by chaining entries of the same slot in a bucket.
#[derive(Clone)]
pub struct SeparateChaining<K, V, S = FxBuildHasher> {
    buckets: Vec<ArrayList<(K, V)>>,
    len: usize,
    rehashes: usize,
    hasher: S,
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<ArrayList<(K, V)>> {
    (0..capacity).map(|_| ArrayList::new()).collect()
}

impl<K, V> SeparateChaining<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with the smallest prime number of slots `>= capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher::default())
    }
}

impl<K, V> Default for SeparateChaining<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> SeparateChaining<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty table with the smallest prime number of slots `>= capacity`
    /// that hashes its keys with `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            buckets: empty_buckets(next_prime(capacity)),
            len: 0,
            rehashes: 0,
            hasher,
        }
    }

    /// Returns the 1-based slot of `key`
    pub fn hash(&self, key: &K) -> usize {
        slot_of(&self.hasher, key, self.buckets.len())
    }

    /// Returns how often the table has grown
    pub fn rehash_count(&self) -> usize {
        self.rehashes
    }

    /// Iterates over all entries in slot order
    pub fn iter(&self) -> Iter<'_, K, V> {
        let empty: &[(K, V)] = &[];
        Iter {
            buckets: self.buckets.iter(),
            current: empty.iter(),
        }
    }

    /// Iterates over all keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates over all values in slot order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    fn bucket_of(&self, key: &K) -> &ArrayList<(K, V)> {
        &self.buckets[self.hash(key) - 1]
    }

    fn bucket_of_mut(&mut self, key: &K) -> &mut ArrayList<(K, V)> {
        let index = self.hash(key) - 1;
        &mut self.buckets[index]
    }

    /// Doubles the capacity (rounded up to a prime) and redistributes all entries
    fn rehash(&mut self) {
        let capacity = next_prime(2 * self.buckets.len());
        let old = std::mem::replace(&mut self.buckets, empty_buckets(capacity));

        for (key, value) in old.into_iter().flatten() {
            self.bucket_of_mut(&key).add_last((key, value));
        }

        self.rehashes += 1;
        debug!(capacity, len = self.len, "rehashed separate-chaining table");
    }
}

impl<K, V, S> SymbolTable<K, V> for SeparateChaining<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.bucket_of_mut(&key);
        if let Some((_, old)) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(old, value));
        }

        bucket.add_last((key, value));
        self.len += 1;

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.rehash();
        }
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.bucket_of(key)
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.bucket_of_mut(key)
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let bucket = self.bucket_of_mut(key);
        let pos = bucket.iter().position(|(k, _)| k == key)? + 1;
        let (_, value) = bucket.delete_element(pos).ok()?;
        self.len -= 1;
        Some(value)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn key_set(&self) -> ArrayList<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    fn value_set(&self) -> ArrayList<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }
}

impl<K, V, S> std::fmt::Debug for SeparateChaining<K, V, S>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// Iterator over the entries of a [`SeparateChaining`] table, bucket by bucket.
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, ArrayList<(K, V)>>,
    current: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((k, v)) = self.current.next() {
                return Some((k, v));
            }
            self.current = self.buckets.next()?.iter();
        }
    }
}

test_symbol_table!(test_chaining_ops, SeparateChaining);
