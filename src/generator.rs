// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lazy backtracking enumeration of k-subsets.
//!
//! This module implements the core of the crate: a depth-first backtracking
//! cursor that produces every k-subset of a pool in lexicographic order of
//! the chosen pool indices, one subset per `next()` call.
//!
//! # Cursor model
//!
//! Recursive backtracking suspends at each leaf (full-length path) to hand
//! the subset to the consumer. Rather than a recursive generator, the cursor
//! holds the backtracking state explicitly — the pool, `k`, and the current
//! index path — and advances it one leaf per [`Iterator::next`] call:
//!
//! 1. Pop the deepest index. If it can advance within its pruning bound
//!    (`n - k + depth`, the tightest bound that leaves room to fill the
//!    remaining slots), advance it and re-extend the path with consecutive
//!    indices down to depth `k`.
//! 2. Otherwise keep popping (backtrack). An empty path means exhaustion.
//!
//! This preserves the two invariants that matter for large runs:
//!
//! - **Laziness**: nothing is materialized beyond the current path; a
//!   consumer that stops calling `next()` stops all further work.
//! - **Ordering**: indices only ever advance, so subsets appear in strict
//!   ascending lexicographic order and two runs over the same input produce
//!   identical sequences.
//!
//! # Step counting
//!
//! The cursor counts finalized subsets and invokes an optional step callback
//! with the 1-based running count after each one — the hook the
//! instrumentation sampler observes long runs through.

use crate::constants::{Combination, PICK_SIZE};

/// Exclusive states of the subset cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    /// `next()` has not been called yet.
    NotStarted,
    /// At least one subset has been emitted; `indices` holds the last one.
    Running,
    /// The search space is exhausted; `next()` returns `None` forever.
    Exhausted,
}

/// Iterator over all k-subsets of a pool, in lexicographic index order.
///
/// Yields each subset as a `Vec<T>` of length `k`. Tolerant preconditions:
/// `k > pool.len()` yields an empty sequence (no error), and `k == 0` yields
/// exactly one empty subset.
///
/// # Example
///
/// ```
/// use combigen::generator::KSubsets;
///
/// let subsets: Vec<_> = KSubsets::new(vec![1, 2, 3, 4], 2).collect();
/// assert_eq!(
///     subsets,
///     vec![
///         vec![1, 2], vec![1, 3], vec![1, 4],
///         vec![2, 3], vec![2, 4], vec![3, 4],
///     ]
/// );
/// ```
pub struct KSubsets<'cb, T> {
    /// The ordered pool being drawn from.
    pool: Vec<T>,

    /// Subset size.
    k: usize,

    /// Current index path into `pool`; the backtracking stack.
    indices: Vec<usize>,

    state: CursorState,

    /// Number of subsets finalized so far.
    count: u64,

    /// Invoked with the 1-based running count after each finalized subset.
    on_step: Option<Box<dyn FnMut(u64) + 'cb>>,
}

impl<'cb, T: Copy> KSubsets<'cb, T> {
    /// Create a cursor over all k-subsets of `pool`.
    pub fn new(pool: Vec<T>, k: usize) -> Self {
        Self {
            pool,
            k,
            indices: Vec::with_capacity(k),
            state: CursorState::NotStarted,
            count: 0,
            on_step: None,
        }
    }

    /// Create a cursor that invokes `on_step` after each finalized subset.
    pub fn with_step_callback(pool: Vec<T>, k: usize, on_step: impl FnMut(u64) + 'cb) -> Self {
        Self {
            on_step: Some(Box::new(on_step)),
            ..Self::new(pool, k)
        }
    }

    /// Number of subsets finalized so far.
    pub fn steps(&self) -> u64 {
        self.count
    }

    /// Finalize the subset designated by the current index path.
    fn emit(&mut self) -> Vec<T> {
        self.count += 1;
        if let Some(cb) = self.on_step.as_mut() {
            cb(self.count);
        }
        self.indices.iter().map(|&i| self.pool[i]).collect()
    }

    /// Advance the index path to the next leaf, backtracking as needed.
    ///
    /// Returns false when the search space is exhausted.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        while let Some(i) = self.indices.pop() {
            // Slot `depth` may hold at most index n - k + depth, the tightest
            // bound that still leaves pool elements for the remaining slots.
            let depth = self.indices.len();
            if i + 1 <= n - (self.k - depth) {
                self.indices.push(i + 1);
                while self.indices.len() < self.k {
                    let next = self.indices.last().unwrap() + 1;
                    self.indices.push(next);
                }
                return true;
            }
        }
        false
    }
}

impl<T: Copy> Iterator for KSubsets<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.state {
            CursorState::Exhausted => None,
            CursorState::NotStarted => {
                if self.k > self.pool.len() {
                    self.state = CursorState::Exhausted;
                    return None;
                }
                self.indices.extend(0..self.k);
                self.state = CursorState::Running;
                Some(self.emit())
            }
            CursorState::Running => {
                if self.advance() {
                    Some(self.emit())
                } else {
                    self.state = CursorState::Exhausted;
                    None
                }
            }
        }
    }
}

/// Stream of complete combinations: each free k-subset merged with the
/// required numbers into a sorted [`Combination`].
///
/// The required slice and the free pool must each be sorted ascending and
/// disjoint; both are established by configuration validation before a
/// stream is built.
pub struct CombinationStream<'cb> {
    required: Vec<u8>,
    subsets: KSubsets<'cb, u8>,
}

impl<'cb> CombinationStream<'cb> {
    /// Build a stream drawing `k_free` numbers from `free_pool` around the
    /// pinned `required` numbers.
    pub fn new(required: Vec<u8>, free_pool: Vec<u8>, k_free: usize) -> Self {
        debug_assert!(required.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(free_pool.windows(2).all(|w| w[0] < w[1]));
        debug_assert_eq!(required.len() + k_free, PICK_SIZE);
        Self {
            required,
            subsets: KSubsets::new(free_pool, k_free),
        }
    }

    /// As [`CombinationStream::new`], with a step callback on the underlying
    /// subset cursor.
    pub fn with_step_callback(
        required: Vec<u8>,
        free_pool: Vec<u8>,
        k_free: usize,
        on_step: impl FnMut(u64) + 'cb,
    ) -> Self {
        debug_assert_eq!(required.len() + k_free, PICK_SIZE);
        Self {
            required,
            subsets: KSubsets::with_step_callback(free_pool, k_free, on_step),
        }
    }

    /// Number of free subsets generated so far.
    pub fn steps(&self) -> u64 {
        self.subsets.steps()
    }

    /// Merge the sorted required numbers and a sorted free subset into one
    /// sorted combination.
    fn merge(&self, free: &[u8]) -> Combination {
        let mut combo: Combination = [0; PICK_SIZE];
        let (mut r, mut f) = (0, 0);
        for slot in combo.iter_mut() {
            let take_required = match (self.required.get(r), free.get(f)) {
                (Some(&a), Some(&b)) => a < b,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => unreachable!("lengths sum to PICK_SIZE"),
            };
            if take_required {
                *slot = self.required[r];
                r += 1;
            } else {
                *slot = free[f];
                f += 1;
            }
        }
        combo
    }
}

impl Iterator for CombinationStream<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let free = self.subsets.next()?;
        Some(self.merge(&free))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_of_four() {
        let subsets: Vec<_> = KSubsets::new(vec![1u8, 2, 3, 4], 2).collect();
        assert_eq!(
            subsets,
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4],
            ]
        );
    }

    #[test]
    fn test_count_matches_binomial() {
        use crate::binomial::binomial;
        for k in 0..=8usize {
            let pool: Vec<u8> = (1..=8).collect();
            let count = KSubsets::new(pool, k).count() as u64;
            assert_eq!(count, binomial(8, k as i64).unwrap(), "k={k}");
        }
    }

    #[test]
    fn test_k_zero_yields_one_empty_subset() {
        let mut cur = KSubsets::new(vec![1u8, 2, 3], 0);
        assert_eq!(cur.next(), Some(vec![]));
        assert_eq!(cur.next(), None);
        assert_eq!(cur.steps(), 1);
    }

    #[test]
    fn test_k_larger_than_pool_is_empty() {
        let mut cur = KSubsets::new(vec![1u8, 2, 3], 4);
        assert_eq!(cur.next(), None);
        assert_eq!(cur.steps(), 0);
    }

    #[test]
    fn test_empty_pool() {
        assert_eq!(KSubsets::new(Vec::<u8>::new(), 0).count(), 1);
        assert_eq!(KSubsets::new(Vec::<u8>::new(), 1).count(), 0);
    }

    #[test]
    fn test_k_equals_pool_length() {
        let mut cur = KSubsets::new(vec![7u8, 8, 9], 3);
        assert_eq!(cur.next(), Some(vec![7, 8, 9]));
        assert_eq!(cur.next(), None);
    }

    #[test]
    fn test_lexicographic_order() {
        let subsets: Vec<_> = KSubsets::new((1u8..=7).collect(), 3).collect();
        for pair in subsets.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_determinism() {
        let a: Vec<_> = KSubsets::new((1u8..=9).collect(), 4).collect();
        let b: Vec<_> = KSubsets::new((1u8..=9).collect(), 4).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_callback_sequence() {
        let mut seen = Vec::new();
        {
            let cur = KSubsets::with_step_callback((1u8..=5).collect(), 2, |step| {
                seen.push(step);
            });
            assert_eq!(cur.count(), 10);
        }
        assert_eq!(seen, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_callback_stops_with_consumer() {
        let mut steps = 0u64;
        {
            let mut cur = KSubsets::with_step_callback((1u8..=6).collect(), 3, |s| steps = s);
            cur.next();
            cur.next();
            cur.next();
            // Consumer walks away; no further subsets are generated.
        }
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_generic_over_element_type() {
        let subsets: Vec<_> = KSubsets::new(vec!["a", "b", "c"], 2).collect();
        assert_eq!(subsets, vec![vec!["a", "b"], vec!["a", "c"], vec!["b", "c"]]);
    }

    #[test]
    fn test_stream_merges_required() {
        // Required {1,2}, free pool 3..=25, full combinations of 15.
        let required = vec![1u8, 2];
        let free: Vec<u8> = (3u8..=25).collect();
        let mut stream = CombinationStream::new(required, free, 13);

        let first = stream.next().unwrap();
        assert_eq!(first, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);

        let second = stream.next().unwrap();
        assert_eq!(second, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16]);
    }

    #[test]
    fn test_stream_interleaved_required() {
        // Required numbers that land in the middle of the free picks.
        let required = vec![5u8, 20];
        let free: Vec<u8> = (1u8..=25).filter(|v| *v != 5 && *v != 20).collect();
        let mut stream = CombinationStream::new(required, free, 13);

        let first = stream.next().unwrap();
        assert_eq!(first, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 20]);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stream_all_required() {
        // k_free = 0: exactly one combination, the required set itself.
        let required: Vec<u8> = (1u8..=15).collect();
        let free: Vec<u8> = (16u8..=25).collect();
        let mut stream = CombinationStream::new(required.clone(), free, 0);

        let only = stream.next().unwrap();
        assert_eq!(only.to_vec(), required);
        assert_eq!(stream.next(), None);
    }
}
