/*!
# Priority Queue

[`MinPQ`] is a binary min-heap of `(key, value)` pairs stored in an [`ArrayList`].
The heap is 1-indexed: the node at position `p` has its children at `2p` and `2p + 1`
and its parent at `p / 2`. For every node but the root, `parent key <= child key`.

Keys are ordered by a comparator; [`MinPQ::new`] uses [`PartialOrd`] and treats
incomparable keys (e.g. `NaN`) as equal.

```
use kgraphs::pq::MinPQ;

let mut pq = MinPQ::new();
pq.insert(2.5, "b");
pq.insert(0.5, "a");
pq.insert(7.0, "c");

assert_eq!(pq.min(), Some((&0.5, &"a")));
assert_eq!(pq.del_min(), Some((0.5, "a")));
assert_eq!(pq.del_min(), Some((2.5, "b")));
assert_eq!(pq.size(), 1);
```
*/

use std::cmp::Ordering;

use crate::seq::{ArrayList, Sequence};

/// Comparator of [`MinPQ::new`]
pub type NaturalOrder<K> = fn(&K, &K) -> Ordering;

fn natural_order<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Binary min-heap keyed by `K` under the comparator `C`.
#[derive(Clone)]
pub struct MinPQ<K, V, C = NaturalOrder<K>> {
    heap: ArrayList<(K, V)>,
    cmp: C,
}

impl<K: PartialOrd, V> MinPQ<K, V> {
    /// Creates an empty queue ordered by `PartialOrd`
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<K> as NaturalOrder<K>)
    }
}

impl<K: PartialOrd, V> Default for MinPQ<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> MinPQ<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty queue whose minimum is the smallest key under `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: ArrayList::new(),
            cmp,
        }
    }

    pub fn size(&self) -> usize {
        self.heap.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the entry with the smallest key without removing it
    pub fn min(&self) -> Option<(&K, &V)> {
        self.heap.as_slice().first().map(|(k, v)| (k, v))
    }

    /// Adds an entry in `O(log n)`
    pub fn insert(&mut self, key: K, value: V) {
        self.heap.add_last((key, value));
        self.swim(self.heap.size());
    }

    /// Removes and returns the entry with the smallest key in `O(log n)`,
    /// `None` if the queue is empty
    pub fn del_min(&mut self) -> Option<(K, V)> {
        let n = self.heap.size();
        if n == 0 {
            return None;
        }

        self.swap(1, n);
        let min = self.heap.remove_last().ok()?;
        self.sink(1);
        Some(min)
    }

    /// Returns *true* if the key at 1-based position `a` is strictly smaller than at `b`
    fn less(&self, a: usize, b: usize) -> bool {
        let heap = self.heap.as_slice();
        (self.cmp)(&heap[a - 1].0, &heap[b - 1].0) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.as_mut_slice().swap(a - 1, b - 1);
    }

    fn swim(&mut self, mut pos: usize) {
        while pos > 1 && self.less(pos, pos / 2) {
            self.swap(pos, pos / 2);
            pos /= 2;
        }
    }

    fn sink(&mut self, mut pos: usize) {
        let n = self.heap.size();
        while 2 * pos <= n {
            let mut child = 2 * pos;
            if child < n && self.less(child + 1, child) {
                child += 1;
            }
            if !self.less(child, pos) {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}

impl<K, V, C> std::fmt::Debug for MinPQ<K, V, C>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinPQ").field("heap", &self.heap).finish()
    }
}
