/*!
# Sorting

Comparison sorts that work in place on any [`Sequence`] through its positional
operations (`get_element`, `change_info`, `exchange`). Every function takes a
comparator and a direction: with `ascending == false` the comparator is reversed.

| Algorithm       | Time            | Notes                                          |
|-----------------|-----------------|------------------------------------------------|
| selection sort  | `O(n^2)`        |                                                |
| insertion sort  | `O(n^2)`        | `O(n)` on sorted input                         |
| Shell sort      | `O(n^{3/2})`    | gaps `1, 4, 13, 40, ...`                       |
| quicksort       | `O(n^2)` worst  | Lomuto partition around the last element       |
| mergesort       | `O(n log n)`    | stable, halves are copied with `sublist`       |

A [`Sorter`] bundles the choice of algorithm and direction:

```
use kgraphs::{seq::ArrayList, sort::{SortAlgorithm, Sorter}};

let mut list: ArrayList<u32> = [5, 3, 9, 1].into_iter().collect();
Sorter::new()
    .algorithm(SortAlgorithm::Shell)
    .ascending(false)
    .sort(&mut list)
    .unwrap();
assert_eq!(list.as_slice(), &[9, 5, 3, 1]);
```
*/

use std::cmp::Ordering;

use tracing::trace;

use crate::{error::Result, seq::Sequence};

/// Compares `a` and `b` under `cmp`, reversed unless `ascending`
fn directed<T, F>(cmp: &mut F, ascending: bool, a: &T, b: &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    let order = cmp(a, b);
    if ascending { order } else { order.reverse() }
}

/// Returns *true* if the element at `a` belongs strictly before the element at `b`
fn precedes<T, L, F>(list: &L, cmp: &mut F, ascending: bool, a: usize, b: usize) -> Result<bool>
where
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let order = directed(cmp, ascending, list.get_element(a)?, list.get_element(b)?);
    Ok(order == Ordering::Less)
}

/// Sorts `list` by repeatedly moving the smallest remaining element to the front.
pub fn selection_sort<T, L, F>(list: &mut L, mut cmp: F, ascending: bool) -> Result<()>
where
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.size();
    for i in 1..n {
        let mut best = i;
        for j in i + 1..=n {
            if precedes(&*list, &mut cmp, ascending, j, best)? {
                best = j;
            }
        }
        if best != i {
            list.exchange(i, best)?;
        }
    }
    Ok(())
}

/// Sorts `list` by sinking every element into the sorted prefix before it.
pub fn insertion_sort<T, L, F>(list: &mut L, mut cmp: F, ascending: bool) -> Result<()>
where
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 2..=list.size() {
        let mut j = i;
        while j > 1 && precedes(&*list, &mut cmp, ascending, j, j - 1)? {
            list.exchange(j, j - 1)?;
            j -= 1;
        }
    }
    Ok(())
}

/// Sorts `list` with insertion sorts over decreasing gaps `h = 3h + 1`.
pub fn shell_sort<T, L, F>(list: &mut L, mut cmp: F, ascending: bool) -> Result<()>
where
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.size();
    let mut h = 1;
    while h < n / 3 {
        h = 3 * h + 1;
    }

    while h >= 1 {
        for i in h + 1..=n {
            let mut j = i;
            while j > h && precedes(&*list, &mut cmp, ascending, j, j - h)? {
                list.exchange(j, j - h)?;
                j -= h;
            }
        }
        h /= 3;
    }
    Ok(())
}

/// Sorts `list` with quicksort, partitioning around the last element of each range.
///
/// The pivot is not randomized, so already sorted input takes quadratic time.
/// Recursion only descends into the smaller part, which bounds the stack depth
/// by `O(log n)`.
pub fn quick_sort<T, L, F>(list: &mut L, mut cmp: F, ascending: bool) -> Result<()>
where
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.size();
    if n > 1 {
        quick_sort_range(list, &mut cmp, ascending, 1, n)?;
    }
    Ok(())
}

fn quick_sort_range<T, L, F>(
    list: &mut L,
    cmp: &mut F,
    ascending: bool,
    mut lo: usize,
    mut hi: usize,
) -> Result<()>
where
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    while lo < hi {
        let p = partition(list, cmp, ascending, lo, hi)?;
        if p - lo < hi - p {
            if p > lo {
                quick_sort_range(list, cmp, ascending, lo, p - 1)?;
            }
            lo = p + 1;
        } else {
            quick_sort_range(list, cmp, ascending, p + 1, hi)?;
            if p == lo {
                break;
            }
            hi = p - 1;
        }
    }
    Ok(())
}

/// Lomuto partition of `lo..=hi` around the element at `hi`; returns its final position
fn partition<T, L, F>(
    list: &mut L,
    cmp: &mut F,
    ascending: bool,
    lo: usize,
    hi: usize,
) -> Result<usize>
where
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut boundary = lo;
    for j in lo..hi {
        if !precedes(&*list, cmp, ascending, hi, j)? {
            if boundary != j {
                list.exchange(boundary, j)?;
            }
            boundary += 1;
        }
    }
    if boundary != hi {
        list.exchange(boundary, hi)?;
    }
    Ok(boundary)
}

/// Sorts `list` with a stable top-down mergesort.
///
/// Both halves are copied out with [`Sequence::sublist`], sorted recursively and
/// merged back into `list`.
pub fn merge_sort<T, L, F>(list: &mut L, mut cmp: F, ascending: bool) -> Result<()>
where
    T: Clone,
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_by(list, &mut cmp, ascending)
}

fn merge_sort_by<T, L, F>(list: &mut L, cmp: &mut F, ascending: bool) -> Result<()>
where
    T: Clone,
    L: Sequence<T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = list.size();
    if n <= 1 {
        return Ok(());
    }

    let mid = n / 2;
    let mut left = list.sublist(1, mid)?;
    let mut right = list.sublist(mid + 1, n - mid)?;
    merge_sort_by(&mut left, cmp, ascending)?;
    merge_sort_by(&mut right, cmp, ascending)?;

    let (mut i, mut j) = (1, 1);
    for k in 1..=n {
        let take_left = if i > left.size() {
            false
        } else if j > right.size() {
            true
        } else {
            // ties go left to keep the sort stable
            let (l, r) = (left.get_element(i)?, right.get_element(j)?);
            directed(cmp, ascending, r, l) != Ordering::Less
        };

        let element = if take_left {
            i += 1;
            left.get_element(i - 1)?
        } else {
            j += 1;
            right.get_element(j - 1)?
        };
        list.change_info(k, element.clone())?;
    }
    Ok(())
}

/// Available sorting algorithms
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    Selection,
    Insertion,
    Shell,
    Quick,
    #[default]
    Merge,
}

/// Configurable sorter: algorithm and direction are set with the builder
/// methods, defaults are [`SortAlgorithm::Merge`] in ascending order.
#[derive(Debug, Copy, Clone)]
pub struct Sorter {
    algorithm: SortAlgorithm,
    ascending: bool,
}

impl Default for Sorter {
    fn default() -> Self {
        Self {
            algorithm: SortAlgorithm::default(),
            ascending: true,
        }
    }
}

impl Sorter {
    /// Creates a new sorter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the algorithm
    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.set_algorithm(algorithm);
        self
    }

    /// Updates the algorithm
    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = algorithm;
    }

    /// Updates the direction
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.set_ascending(ascending);
        self
    }

    /// Updates the direction
    pub fn set_ascending(&mut self, ascending: bool) {
        self.ascending = ascending;
    }

    pub fn get_algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Sorts `list` by `cmp` with the configured algorithm and direction
    pub fn sort_by<T, L, F>(&self, list: &mut L, cmp: F) -> Result<()>
    where
        T: Clone,
        L: Sequence<T>,
        F: FnMut(&T, &T) -> Ordering,
    {
        trace!(
            algorithm = ?self.algorithm,
            ascending = self.ascending,
            len = list.size(),
            "sorting"
        );

        match self.algorithm {
            SortAlgorithm::Selection => selection_sort(list, cmp, self.ascending),
            SortAlgorithm::Insertion => insertion_sort(list, cmp, self.ascending),
            SortAlgorithm::Shell => shell_sort(list, cmp, self.ascending),
            SortAlgorithm::Quick => quick_sort(list, cmp, self.ascending),
            SortAlgorithm::Merge => merge_sort(list, cmp, self.ascending),
        }
    }

    /// Sorts `list` by the natural order of its elements
    pub fn sort<T, L>(&self, list: &mut L) -> Result<()>
    where
        T: Ord + Clone,
        L: Sequence<T>,
    {
        self.sort_by(list, T::cmp)
    }

    /// Sorts `list` by the key extracted with `f`
    pub fn sort_by_key<T, L, B, F>(&self, list: &mut L, mut f: F) -> Result<()>
    where
        T: Clone,
        L: Sequence<T>,
        B: Ord,
        F: FnMut(&T) -> B,
    {
        self.sort_by(list, |a, b| f(a).cmp(&f(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::ArrayList;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use std::collections::VecDeque;

    const ALGORITHMS: [SortAlgorithm; 5] = [
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
    ];

    #[test]
    fn matches_slice_sort() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for algorithm in ALGORITHMS {
            for n in [0, 1, 2, 3, 10, 57, 300] {
                let values = (0..n).map(|_| rng.random_range(0..50)).collect_vec();

                for ascending in [true, false] {
                    let mut list: ArrayList<i32> = values.iter().copied().collect();
                    Sorter::new()
                        .algorithm(algorithm)
                        .ascending(ascending)
                        .sort(&mut list)
                        .unwrap();

                    let mut expected = values.clone();
                    if ascending {
                        expected.sort_by(|a, b| a.cmp(b));
                    } else {
                        expected.sort_by(|a, b| b.cmp(a));
                    }
                    assert_eq!(list.as_slice(), expected.as_slice(), "{algorithm:?}");
                }
            }
        }
    }

    #[test]
    fn sorts_deques() {
        for algorithm in ALGORITHMS {
            let mut deque: VecDeque<char> = "kgraphsort".chars().collect();
            Sorter::new().algorithm(algorithm).sort(&mut deque).unwrap();
            assert_eq!(deque.iter().collect::<String>(), "aghkoprrst");
        }
    }

    #[test]
    fn free_functions_with_comparator() {
        let words = ["pear", "fig", "banana", "kiwi", "apple"];
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());

        let mut list: ArrayList<&str> = words.into_iter().collect();
        insertion_sort(&mut list, by_len, false).unwrap();
        assert_eq!(list.as_slice()[0], "banana");
        assert_eq!(list.as_slice()[4], "fig");

        let mut list: ArrayList<&str> = words.into_iter().collect();
        shell_sort(&mut list, |a: &&str, b: &&str| a.cmp(b), true).unwrap();
        assert_eq!(list.as_slice(), &["apple", "banana", "fig", "kiwi", "pear"]);
    }

    #[test]
    fn merge_sort_is_stable() {
        let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e'), (2, 'f')];

        let mut list: ArrayList<(u32, char)> = pairs.into_iter().collect();
        Sorter::new().sort_by_key(&mut list, |p| p.0).unwrap();
        assert_eq!(list.iter().map(|p| p.1).collect::<String>(), "ebdacf");

        let mut list: ArrayList<(u32, char)> = pairs.into_iter().collect();
        Sorter::new()
            .ascending(false)
            .sort_by_key(&mut list, |p| p.0)
            .unwrap();
        assert_eq!(list.iter().map(|p| p.1).collect::<String>(), "acfbde");
    }

    #[test]
    fn quick_sort_on_sorted_input() {
        let n = 5_000;
        let mut list: ArrayList<u32> = (0..n).collect();
        quick_sort(&mut list, u32::cmp, true).unwrap();
        assert!(list.as_slice().is_sorted());

        quick_sort(&mut list, u32::cmp, false).unwrap();
        assert!(list.iter().rev().is_sorted());
    }

    #[test]
    fn float_keys() {
        let mut list: ArrayList<f64> = [2.5, -1.0, 0.0, 9.75].into_iter().collect();
        Sorter::new()
            .algorithm(SortAlgorithm::Quick)
            .sort_by(&mut list, |a, b| a.total_cmp(b))
            .unwrap();
        assert_eq!(list.as_slice(), &[-1.0, 0.0, 2.5, 9.75]);
    }

    #[test]
    fn sorter_configuration() {
        let mut sorter = Sorter::new();
        assert_eq!(sorter.get_algorithm(), SortAlgorithm::Merge);
        assert!(sorter.is_ascending());

        sorter.set_algorithm(SortAlgorithm::Selection);
        sorter.set_ascending(false);
        assert_eq!(sorter.get_algorithm(), SortAlgorithm::Selection);
        assert!(!sorter.is_ascending());
    }
}
