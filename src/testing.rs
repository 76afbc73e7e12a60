/// Hasher that uses integer keys verbatim, so tests can place keys into chosen slots:
/// in a table of capacity `m`, key `k` lands in slot `k % m + 1`.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IdentityState;

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct IdentityHasher(u64);

#[cfg(test)]
impl std::hash::Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 << 8) | b as u64;
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

#[cfg(test)]
impl std::hash::BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}

/// Every symbol table should behave identically from the outside
macro_rules! test_symbol_table {
    ($env:ident, $table:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{seq::*, table::*, testing::IdentityState};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn table_new() {
                for hint in [0, 1, 2, 10, 100] {
                    let table: $table<u64, u64> = $table::with_capacity(hint);
                    assert!(table.is_empty());
                    assert_eq!(table.size(), 0);
                    assert!(is_prime(table.capacity()));
                    assert!(table.capacity() >= hint);
                    assert!(table.get(&1).is_none());
                    assert!(table.key_set().is_empty());
                }
            }

            #[test]
            fn put_overwrites() {
                let mut table: $table<&str, u32> = $table::new();
                assert_eq!(table.put("a", 1), None);
                assert_eq!(table.put("b", 2), None);
                assert_eq!(table.put("a", 3), Some(1));

                assert_eq!(table.size(), 2);
                assert_eq!(table.get(&"a"), Some(&3));
                assert_eq!(table.get(&"b"), Some(&2));

                *table.get_mut(&"b").unwrap() += 40;
                assert_eq!(table.get(&"b"), Some(&42));
                assert!(table.get_mut(&"c").is_none());
            }

            #[test]
            fn rehash_keeps_entries() {
                let mut table: $table<u64, u64> = $table::with_capacity(10);
                let initial = table.capacity();

                for k in 0..100 {
                    table.put(k, k * k);
                    assert!(table.load_factor() <= MAX_LOAD_FACTOR);
                }

                assert!(table.rehash_count() >= 1);
                assert!(table.capacity() > initial);
                assert!(is_prime(table.capacity()));
                assert_eq!(table.size(), 100);
                for k in 0..100 {
                    assert_eq!(table.get(&k), Some(&(k * k)));
                }
            }

            #[test]
            fn remove() {
                let mut table: $table<u64, char> = $table::with_capacity(4);
                for (k, c) in (0..20).zip('a'..) {
                    table.put(k, c);
                }

                assert_eq!(table.remove(&3), Some('d'));
                assert_eq!(table.remove(&3), None);
                assert_eq!(table.remove(&99), None);
                assert_eq!(table.size(), 19);
                assert!(!table.contains(&3));
                assert!(table.contains(&4));

                for k in 0..20 {
                    table.remove(&k);
                }
                assert!(table.is_empty());
            }

            #[test]
            fn key_and_value_sets() {
                let mut table: $table<u64, u64> = $table::with_capacity(3);
                for k in 0..50 {
                    table.put(k, 1000 + k);
                }

                let keys = table.key_set();
                let values = table.value_set();
                assert_eq!(keys.size(), 50);
                assert_eq!(values.size(), 50);

                assert_eq!(keys.iter().copied().sorted().collect_vec(), (0..50).collect_vec());
                assert_eq!(
                    values.iter().copied().sorted().collect_vec(),
                    (1000..1050).collect_vec()
                );

                // both sets are produced in the same slot order
                for (k, v) in keys.iter().zip(values.iter()) {
                    assert_eq!(*v, 1000 + *k);
                }
            }

            #[test]
            fn colliding_keys() {
                let mut table: $table<u64, u64, IdentityState> =
                    $table::with_capacity_and_hasher(10, IdentityState);
                let m = table.capacity() as u64;

                // all keys share the home slot
                let keys = [5, 5 + m, 5 + 2 * m, 5 + 3 * m];
                for &k in &keys {
                    table.put(k, k);
                }
                assert_eq!(table.size(), keys.len());

                assert_eq!(table.remove(&keys[1]), Some(keys[1]));
                assert_eq!(table.get(&keys[0]), Some(&keys[0]));
                assert_eq!(table.get(&keys[2]), Some(&keys[2]));
                assert_eq!(table.get(&keys[3]), Some(&keys[3]));
                assert!(!table.contains(&keys[1]));
            }

            #[test]
            fn random_operations() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for _ in 0..10 {
                    let mut table: $table<u32, u32> = $table::with_capacity(rng.random_range(0..20));
                    let mut model: FxHashMap<u32, u32> = FxHashMap::default();

                    for _ in 0..2000 {
                        let key = rng.random_range(0..300);
                        if rng.random_bool(0.7) {
                            let value = rng.random();
                            assert_eq!(table.put(key, value), model.insert(key, value));
                        } else {
                            assert_eq!(table.remove(&key), model.remove(&key));
                        }
                        assert_eq!(table.size(), model.len());
                    }

                    for key in 0..300 {
                        assert_eq!(table.get(&key), model.get(&key));
                    }
                }
            }
        }
    };
}

pub(crate) use test_symbol_table;

/// Builds a graph over the vertices `0..n` with the given weighted edges
#[cfg(test)]
pub(crate) fn weighted_graph<I>(n: u32, edges: I) -> crate::graph::Graph<u32, ()>
where
    I: IntoIterator<Item = (u32, u32, f64)>,
{
    let mut graph = crate::graph::Graph::new(n as usize);
    for u in 0..n {
        graph.insert_vertex(u, ());
    }
    for (u, v, w) in edges {
        graph.add_edge(&u, &v, w);
    }
    graph
}

/// Builds a graph over the vertices `0..n` with the given edges of weight `1.0`
#[cfg(test)]
pub(crate) fn unit_graph<I>(n: u32, edges: I) -> crate::graph::Graph<u32, ()>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    weighted_graph(n, edges.into_iter().map(|(u, v)| (u, v, 1.0)))
}
