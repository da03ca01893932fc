//! DC3 (difference-cover-mod-3, a.k.a. skew) suffix array construction: a
//! three-way recursive algorithm combining radix sort passes, rank
//! compaction, and an O(1)-per-comparison merge.

use std::cmp::Ordering;

use crate::radix::{DEFAULT_THRESHOLD, Pass, radix_sort};

/// Builds the suffix array of `symbols`, a dense-encoded stream whose
/// sentinel value (`0`) is strictly smaller than every other symbol.
///
/// Returns a permutation of `0..symbols.len()` such that the suffix starting
/// at `sa[i]` is lexicographically smaller than the suffix starting at
/// `sa[i + 1]`, for every valid `i`. `threshold` is forwarded to every
/// radix sort pass; see [`crate::config::IndexConfig::radix_sort_threshold`].
pub(crate) fn build_suffix_array_with_threshold(symbols: &[u32], threshold: usize) -> Vec<u32> {
    if symbols.is_empty() {
        return Vec::new();
    }

    let alphabet_size = symbols.iter().copied().max().unwrap() as usize + 1;

    skew(symbols, alphabet_size, threshold)
        .into_iter()
        .map(|i| i as u32)
        .collect()
}

/// Reads `s[i]`, treating every position at or past `s.len()` as the
/// implicit padding sentinel `0` (any number of out-of-range reads return
/// `0`,
/// which is always correct because `0` is reserved and never occurs past
/// the intended end of a record's symbols).
fn at(s: &[u32], i: usize) -> u32 {
    s.get(i).copied().unwrap_or(0)
}

/// The recursive core. `s` is treated as a string over `0..alphabet_size`
/// with `0` reserved as a sentinel strictly below every other value, which
/// holds both for the original dense-encoded symbol stream and for the
/// rank sequences built at each recursion level.
fn skew(s: &[u32], alphabet_size: usize, threshold: usize) -> Vec<usize> {
    let n = s.len();
    if n == 0 {
        return Vec::new();
    }

    // M1 / M2 / M12: M12 is the concatenation of M1 followed by M2, not
    // their positions interleaved in index order.
    let m1: Vec<usize> = (1..n).step_by(3).collect();
    let m2: Vec<usize> = (2..n).step_by(3).collect();
    let mut m12 = Vec::with_capacity(m1.len() + m2.len());
    m12.extend_from_slice(&m1);
    m12.extend_from_slice(&m2);

    let sorted_m12 = sort_m12(s, &m12, alphabet_size, threshold);

    // rankOf[p]: 1-based rank of the suffix at p among M12 suffixes; 0 for
    // p not in M12 and for p >= n.
    let mut rank_of = vec![0u32; n + 3];
    for (rank, &p) in sorted_m12.iter().enumerate() {
        rank_of[p] = rank as u32 + 1;
    }

    let sorted_m0 = sort_m0(s, n, &rank_of, alphabet_size, threshold);

    merge(s, &rank_of, &sorted_m0, &sorted_m12)
}

/// Step A: sorts `m12` (given in `M1 ++ M2` order) into full suffix order.
fn sort_m12(s: &[u32], m12: &[usize], alphabet_size: usize, threshold: usize) -> Vec<usize> {
    if m12.len() <= 1 {
        return m12.to_vec();
    }

    let triple_sorted = radix_sort(
        m12.to_vec(),
        &[
            Pass {
                bucket_count: alphabet_size,
                key: &|&i: &usize| at(s, i + 2) as usize,
            },
            Pass {
                bucket_count: alphabet_size,
                key: &|&i: &usize| at(s, i + 1) as usize,
            },
            Pass {
                bucket_count: alphabet_size,
                key: &|&i: &usize| at(s, i) as usize,
            },
        ],
        threshold,
    );

    let triple_of = |i: usize| (at(s, i), at(s, i + 1), at(s, i + 2));

    let mut provisional_rank = vec![0u32; s.len()];
    let mut next_rank = 1u32;
    let mut all_distinct = true;
    let mut prev_triple = None;

    for &i in &triple_sorted {
        let t = triple_of(i);
        if let Some(p) = prev_triple {
            if t == p {
                all_distinct = false;
            } else {
                next_rank += 1;
            }
        }
        provisional_rank[i] = next_rank;
        prev_triple = Some(t);
    }

    if all_distinct {
        return triple_sorted;
    }

    // Ranks are not yet a strict total order: recurse on the rank sequence
    // taken in original M1-then-M2 order.
    let r12: Vec<u32> = m12.iter().map(|&i| provisional_rank[i]).collect();
    let r12_alphabet_size = next_rank as usize + 1;

    skew(&r12, r12_alphabet_size, threshold)
        .into_iter()
        .map(|k| m12[k])
        .collect()
}

/// Step B: sorts M0 (positions `i` with `i % 3 == 0`) by `(T[i], rankOf[i+1])`.
fn sort_m0(
    s: &[u32],
    n: usize,
    rank_of: &[u32],
    alphabet_size: usize,
    threshold: usize,
) -> Vec<usize> {
    let m0: Vec<usize> = (0..n).step_by(3).collect();
    if m0.len() <= 1 {
        return m0;
    }

    let rank_bucket_count = rank_of.iter().copied().max().unwrap_or(0) as usize + 1;

    radix_sort(
        m0,
        &[
            Pass {
                bucket_count: rank_bucket_count,
                key: &|&p: &usize| rank_of[p + 1] as usize,
            },
            Pass {
                bucket_count: alphabet_size,
                key: &|&p: &usize| at(s, p) as usize,
            },
        ],
        threshold,
    )
}

/// Step C: merges `sorted_m0` and `sorted_m12` using `rankOf` to resolve
/// ties in O(1) per comparison.
fn merge(s: &[u32], rank_of: &[u32], sorted_m0: &[usize], sorted_m12: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(sorted_m0.len() + sorted_m12.len());
    let mut i = 0;
    let mut j = 0;

    while i < sorted_m0.len() && j < sorted_m12.len() {
        let a = sorted_m0[i];
        let b = sorted_m12[j];

        match compare(s, rank_of, a, b) {
            Ordering::Less | Ordering::Equal => {
                result.push(a);
                i += 1;
            }
            Ordering::Greater => {
                result.push(b);
                j += 1;
            }
        }
    }

    result.extend_from_slice(&sorted_m0[i..]);
    result.extend_from_slice(&sorted_m12[j..]);

    result
}

/// Compares the suffix at M0 position `a` against the suffix at M12
/// position `b`.
fn compare(s: &[u32], rank_of: &[u32], a: usize, b: usize) -> Ordering {
    let ordering = if b % 3 == 1 {
        (at(s, a), rank_of[a + 1]).cmp(&(at(s, b), rank_of[b + 1]))
    } else {
        debug_assert_eq!(b % 3, 2);
        (at(s, a), at(s, a + 1), rank_of[a + 2]).cmp(&(at(s, b), at(s, b + 1), rank_of[b + 2]))
    };

    debug_assert_ne!(
        ordering,
        Ordering::Equal,
        "DC3 merge comparator tied on distinct positions {a} and {b}; this is an internal invariant violation"
    );

    ordering
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_suffix_array(s: &[u32]) -> Vec<u32> {
        let n = s.len();
        let mut sa: Vec<u32> = (0..n as u32).collect();
        sa.sort_by(|&a, &b| s[a as usize..].cmp(&s[b as usize..]));
        sa
    }

    fn assert_valid_suffix_array(s: &[u32], sa: &[u32]) {
        let n = s.len();
        assert_eq!(sa.len(), n);

        let mut seen = vec![false; n];
        for &p in sa {
            assert!((p as usize) < n);
            assert!(!seen[p as usize], "duplicate suffix array entry {p}");
            seen[p as usize] = true;
        }

        for w in sa.windows(2) {
            let a = w[0] as usize;
            let b = w[1] as usize;
            assert_eq!(
                s[a..].cmp(&s[b..]),
                Ordering::Less,
                "suffix at {a} is not strictly less than suffix at {b}"
            );
        }
    }

    #[test]
    fn empty_stream() {
        assert_eq!(
            build_suffix_array_with_threshold(&[], DEFAULT_THRESHOLD),
            Vec::<u32>::new()
        );
    }

    #[test]
    fn single_symbol() {
        let sa = build_suffix_array_with_threshold(&[5], DEFAULT_THRESHOLD);
        assert_eq!(sa, vec![0]);
    }

    #[test]
    fn matches_naive_for_small_examples() {
        let examples: Vec<Vec<u32>> = vec![
            vec![1, 2, 3, 0],
            vec![1, 1, 1, 1, 0],
            vec![3, 2, 1, 0],
            vec![1, 2, 1, 2, 1, 2, 0],
            vec![1, 0, 2, 0, 1, 0],
            vec![4, 1, 3, 1, 2, 0],
        ];

        for s in examples {
            let sa = build_suffix_array_with_threshold(&s, DEFAULT_THRESHOLD);
            assert_eq!(sa, naive_suffix_array(&s), "mismatch for {s:?}");
            assert_valid_suffix_array(&s, &sa);
        }
    }

    #[test]
    fn matches_naive_with_tiny_radix_threshold() {
        // forces every pass onto the BTreeMap fallback path
        let s = vec![4, 1, 3, 1, 2, 4, 1, 0];
        let sa = build_suffix_array_with_threshold(&s, 1);
        assert_valid_suffix_array(&s, &sa);
        assert_eq!(sa, naive_suffix_array(&s));
    }

    #[test]
    fn handles_long_runs_of_duplicates() {
        let s: Vec<u32> = std::iter::repeat(1).take(200).chain([0]).collect();
        let sa = build_suffix_array_with_threshold(&s, DEFAULT_THRESHOLD);
        assert_valid_suffix_array(&s, &sa);
        assert_eq!(sa, naive_suffix_array(&s));
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(512))]

        #[test]
        fn matches_naive_on_random_streams(
            s in proptest::collection::vec(0u32..4, 0..200)
        ) {
            let mut s = s;
            s.push(0);
            let sa = build_suffix_array_with_threshold(&s, DEFAULT_THRESHOLD);
            assert_valid_suffix_array(&s, &sa);
            prop_assert_eq!(sa, naive_suffix_array(&s));
        }
    }
}
