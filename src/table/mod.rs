/*!
# Symbol Tables

Two hash tables with the same external contract, captured by [`SymbolTable`]:

- [`SeparateChaining`]: every slot holds an [`ArrayList`] of entries,
- [`LinearProbing`]: every slot holds at most one entry, collisions move on to the next slot.

Both keep their capacity prime and grow once the load factor exceeds [`MAX_LOAD_FACTOR`]:
the capacity is doubled, rounded up to the next prime and every live entry is reinserted.
Iteration order is by slot and therefore unrelated to insertion order.

The intrinsic hash of a key is computed by a [`BuildHasher`], [`FxBuildHasher`] by default.

```
use kgraphs::table::*;

let mut table: LinearProbing<&str, u32> = LinearProbing::with_capacity(10);
table.put("lisbon", 1);
table.put("marseille", 2);
table.put("lisbon", 3);

assert_eq!(table.size(), 2);
assert_eq!(table.get(&"lisbon"), Some(&3));
assert!(!table.contains(&"porto"));
```
*/

use std::hash::{BuildHasher, Hash};

pub use fxhash::FxBuildHasher;

use crate::seq::ArrayList;

pub mod chaining;
pub mod linear_probing;

pub use chaining::SeparateChaining;
pub use linear_probing::LinearProbing;

/// A table grows once `size / capacity` exceeds this value
pub const MAX_LOAD_FACTOR: f64 = 0.7;

/// Capacity hint used by `new()`
pub const DEFAULT_CAPACITY: usize = 7;

/// Common interface of both hash tables.
///
/// Absent keys are reported as `None`; no operation fails.
pub trait SymbolTable<K, V> {
    /// Associates `value` with `key` and returns the value previously stored under `key`.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value stored under `key`
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns a mutable reference to the value stored under `key`
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Removes `key` and returns its value
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns *true* if `key` is stored
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of stored entries
    fn size(&self) -> usize;

    /// Returns *true* if no entry is stored
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of slots
    fn capacity(&self) -> usize;

    /// Returns `size / capacity`
    fn load_factor(&self) -> f64 {
        self.size() as f64 / self.capacity() as f64
    }

    /// Returns all keys in slot order
    fn key_set(&self) -> ArrayList<K>
    where
        K: Clone;

    /// Returns all values in slot order
    fn value_set(&self) -> ArrayList<V>
    where
        V: Clone;
}

/// Maps `key` to a 1-based slot in `1..=capacity`
pub(crate) fn slot_of<K, S>(hasher: &S, key: &K, capacity: usize) -> usize
where
    K: Hash + ?Sized,
    S: BuildHasher,
{
    (hasher.hash_one(key) % capacity as u64) as usize + 1
}

/// Returns *true* if `n` is prime
pub fn is_prime(n: usize) -> bool {
    if n <= 3 {
        return n > 1;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns the smallest prime `>= n`
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn primes() {
        let small = (0..30).filter(|&n| is_prime(n)).collect_vec();
        assert_eq!(small, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

        assert!(is_prime(7919));
        assert!(!is_prime(7917));
        assert!(!is_prime(25));
    }

    #[test]
    fn next_primes() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(10), 11);
        assert_eq!(next_prime(22), 23);
        assert_eq!(next_prime(24), 29);
    }

    #[test]
    fn slots_are_one_based() {
        let hasher = FxBuildHasher::default();
        for key in 0..1000u64 {
            let slot = slot_of(&hasher, &key, 11);
            assert!((1..=11).contains(&slot));
        }
    }
}
