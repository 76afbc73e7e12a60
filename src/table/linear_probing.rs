/*!
# Linear Probing

Open-addressing table: every slot stores at most one entry and a key that finds its home
slot occupied moves on to the next slot (wrapping around) until it finds itself or an empty slot.

Deleting an entry would cut the probe chain of every key stored behind it in the same
cluster. Instead of tombstones, [`LinearProbing::remove`] takes all entries between the
vacated slot and the next empty slot out of the table and reinserts them.
*/

use std::hash::{BuildHasher, Hash};

use tracing::debug;

use super::*;
use crate::testing::test_symbol_table;

/// Hash table resolving collisions by linear probing.
///
/// The table never fills up: after every `put` at least one slot is empty
/// (the load factor stays at or below [`MAX_LOAD_FACTOR`]).
#[derive(Clone)]
pub struct LinearProbing<K, V, S = FxBuildHasher> {
    slots: Vec<Option<(K, V)>>,
    len: usize,
    rehashes: usize,
    hasher: S,
}

/// Outcome of probing for a key
enum Probe {
    /// The key is stored in this 0-based slot
    Occupied(usize),
    /// The key is absent; this 0-based slot ended the probe sequence
    Vacant(usize),
    /// Every slot was inspected without finding the key or an empty slot
    Exhausted,
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Option<(K, V)>> {
    (0..capacity).map(|_| None).collect()
}

impl<K, V> LinearProbing<K, V>
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

impl<K, V> Default for LinearProbing<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> LinearProbing<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty table with the smallest prime number of slots `>= capacity`
    /// that hashes its keys with `hasher`
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: empty_slots(next_prime(capacity)),
            len: 0,
            rehashes: 0,
            hasher,
        }
    }

    /// Returns the 1-based home slot of `key`
    pub fn hash(&self, key: &K) -> usize {
        slot_of(&self.hasher, key, self.slots.len())
    }

    /// Returns how often the table has grown
    pub fn rehash_count(&self) -> usize {
        self.rehashes
    }

    /// Iterates over all entries in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.slots.iter().flatten().map(|(k, v)| (k, v))
    }

    /// Iterates over all keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates over all values in slot order
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    fn probe(&self, key: &K) -> Probe {
        let capacity = self.slots.len();
        let mut i = self.hash(key) - 1;

        for _ in 0..capacity {
            match &self.slots[i] {
                None => return Probe::Vacant(i),
                Some((k, _)) if k == key => return Probe::Occupied(i),
                Some(_) => i = (i + 1) % capacity,
            }
        }

        Probe::Exhausted
    }

    /// Stores an entry whose key is known to be absent in the first empty slot of its
    /// probe sequence. Requires at least one empty slot.
    fn place(&mut self, key: K, value: V) {
        let capacity = self.slots.len();
        let mut i = self.hash(&key) - 1;
        while self.slots[i].is_some() {
            i = (i + 1) % capacity;
        }
        self.slots[i] = Some((key, value));
    }

    /// Doubles the capacity (rounded up to a prime) and reinserts all entries
    fn rehash(&mut self) {
        let capacity = next_prime(2 * self.slots.len());
        let old = std::mem::replace(&mut self.slots, empty_slots(capacity));

        for (key, value) in old.into_iter().flatten() {
            self.place(key, value);
        }

        self.rehashes += 1;
        debug!(capacity, len = self.len, "rehashed linear-probing table");
    }
}

impl<K, V, S> SymbolTable<K, V> for LinearProbing<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.probe(&key) {
            Probe::Occupied(i) => self.slots[i]
                .as_mut()
                .map(|(_, old)| std::mem::replace(old, value)),
            Probe::Vacant(i) => {
                self.slots[i] = Some((key, value));
                self.len += 1;
                if self.load_factor() > MAX_LOAD_FACTOR {
                    self.rehash();
                }
                None
            }
            Probe::Exhausted => {
                self.rehash();
                self.put(key, value)
            }
        }
    }

    fn get(&self, key: &K) -> Option<&V> {
        match self.probe(key) {
            Probe::Occupied(i) => self.slots[i].as_ref().map(|(_, v)| v),
            _ => None,
        }
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.probe(key) {
            Probe::Occupied(i) => self.slots[i].as_mut().map(|(_, v)| v),
            _ => None,
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let Probe::Occupied(i) = self.probe(key) else {
            return None;
        };

        let (_, value) = self.slots[i].take()?;
        self.len -= 1;

        // reinsert the rest of the cluster so no probe chain crosses the new gap
        let capacity = self.slots.len();
        let mut j = (i + 1) % capacity;
        while let Some((k, v)) = self.slots[j].take() {
            self.place(k, v);
            j = (j + 1) % capacity;
        }

        Some(value)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
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

impl<K, V, S> std::fmt::Debug for LinearProbing<K, V, S>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().flatten().map(|(k, v)| (k, v)))
            .finish()
    }
}

test_symbol_table!(test_linear_probing_ops, LinearProbing);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::IdentityState;

    fn identity_table(capacity: usize) -> LinearProbing<u64, u64, IdentityState> {
        LinearProbing::with_capacity_and_hasher(capacity, IdentityState)
    }

    fn occupied(table: &LinearProbing<u64, u64, IdentityState>) -> Vec<Option<u64>> {
        table
            .slots
            .iter()
            .map(|s| s.as_ref().map(|(k, _)| *k))
            .collect()
    }

    #[test]
    fn collisions_probe_forward() {
        let mut table = identity_table(11);
        for k in [3, 14, 25] {
            table.put(k, k);
        }
        assert_eq!(table.hash(&3), 4);
        assert_eq!(table.hash(&14), 4);
        assert_eq!(&occupied(&table)[3..6], &[Some(3), Some(14), Some(25)]);
    }

    #[test]
    fn delete_keeps_probe_chain() {
        // A, B and C share their home slot
        let mut table = identity_table(11);
        let (a, b, c) = (3, 14, 25);
        for k in [a, b, c] {
            table.put(k, k * 10);
        }

        assert_eq!(table.remove(&b), Some(b * 10));
        assert_eq!(table.get(&c), Some(&(c * 10)));
        assert_eq!(table.get(&a), Some(&(a * 10)));
        assert_eq!(table.get(&b), None);
        assert_eq!(&occupied(&table)[3..6], &[Some(a), Some(c), None]);

        assert_eq!(table.remove(&a), Some(a * 10));
        assert_eq!(table.get(&c), Some(&(c * 10)));
        assert_eq!(&occupied(&table)[3..5], &[Some(c), None]);
    }

    #[test]
    fn delete_keeps_foreign_keys_in_cluster() {
        // 3 and 14 start at slot 4, 4 starts at slot 5 but is pushed to slot 6
        let mut table = identity_table(11);
        for k in [3, 14, 4] {
            table.put(k, k);
        }
        assert_eq!(&occupied(&table)[3..6], &[Some(3), Some(14), Some(4)]);

        table.remove(&3);
        assert_eq!(table.get(&14), Some(&14));
        assert_eq!(table.get(&4), Some(&4));
        assert_eq!(&occupied(&table)[3..6], &[Some(14), Some(4), None]);
    }

    #[test]
    fn delete_in_wrapping_cluster() {
        // home slot of 10, 21 and 32 is the last slot; the cluster wraps to the front
        let mut table = identity_table(11);
        for k in [10, 21, 32] {
            table.put(k, k);
        }
        assert_eq!(&occupied(&table)[..2], &[Some(21), Some(32)]);

        table.remove(&10);
        assert_eq!(table.get(&21), Some(&21));
        assert_eq!(table.get(&32), Some(&32));
        assert_eq!(occupied(&table)[10], Some(21));
        assert_eq!(&occupied(&table)[..2], &[Some(32), None]);
    }

    #[test]
    fn never_full() {
        let mut table = identity_table(2);
        for k in 0..50 {
            table.put(k, k);
            assert!(table.size() < table.capacity());
        }
        assert_eq!(table.size(), 50);
    }
}
