//! Stable LSD radix sort over small-integer keys, shared by [`crate::dc3`]
//! for sorting triples of symbols and rank-augmented pairs.

use std::collections::BTreeMap;

/// Bucket count above which a pass switches from a flat `Vec`-of-buckets
/// counting sort to a `BTreeMap`-of-buckets sort, so a pathologically large
/// alphabet (e.g. full Unicode private-use text) doesn't force allocating a
/// bucket array sized to it. Still a stable sort either way; see
/// [`crate::config::IndexConfig::radix_sort_threshold`].
pub(crate) const DEFAULT_THRESHOLD: usize = 1 << 20;

/// One pass of an LSD radix sort: extracts a bucket index in `0..bucket_count`
/// for an item.
pub(crate) struct Pass<'a, T> {
    pub(crate) bucket_count: usize,
    pub(crate) key: &'a dyn Fn(&T) -> usize,
}

/// Sorts `items` by applying `passes` from least significant to most
/// significant, each a stable sort over one digit.
///
/// Stability of the whole sort follows from stability of each pass: a pass
/// over a more significant digit never reorders two items whose more
/// significant digits differ, and leaves items with equal digits in
/// whatever order the previous (less significant) passes already settled.
/// The radix sort is correct as long as `passes` is given least-significant
/// first, mirroring how manual digit-by-digit sorting works on paper.
///
/// A pass whose `bucket_count` exceeds `threshold` falls back to a
/// `BTreeMap`-keyed bucketing instead of allocating `bucket_count` empty
/// `Vec`s up front.
pub(crate) fn radix_sort<T: Copy>(items: Vec<T>, passes: &[Pass<T>], threshold: usize) -> Vec<T> {
    let mut items = items;

    for pass in passes {
        items = if pass.bucket_count > threshold {
            btree_sort_pass(&items, pass.key)
        } else {
            counting_sort_pass(&items, pass.bucket_count, pass.key)
        };
    }

    items
}

fn counting_sort_pass<T: Copy>(
    items: &[T],
    bucket_count: usize,
    key: &dyn Fn(&T) -> usize,
) -> Vec<T> {
    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];

    for item in items {
        buckets[key(item)].push(*item);
    }

    let mut output = Vec::with_capacity(items.len());
    for bucket in buckets {
        output.extend(bucket);
    }

    output
}

fn btree_sort_pass<T: Copy>(items: &[T], key: &dyn Fn(&T) -> usize) -> Vec<T> {
    let mut buckets: BTreeMap<usize, Vec<T>> = BTreeMap::new();

    for item in items {
        buckets.entry(key(item)).or_default().push(*item);
    }

    buckets.into_values().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_single_digit_stably() {
        // (value, original_index) so we can check stability
        let items = vec![(2u32, 0u32), (0, 1), (2, 2), (1, 3), (0, 4)];

        let sorted = radix_sort(
            items,
            &[Pass {
                bucket_count: 3,
                key: &|item: &(u32, u32)| item.0 as usize,
            }],
            DEFAULT_THRESHOLD,
        );

        assert_eq!(
            sorted,
            vec![(0, 1), (0, 4), (1, 3), (2, 0), (2, 2)]
        );
    }

    #[test]
    fn sorts_triples_lexicographically() {
        // triples (a, b, c), radix sort LSD: c, then b, then a
        let items: Vec<(u32, u32, u32)> = vec![
            (1, 2, 3),
            (0, 5, 5),
            (1, 0, 0),
            (1, 2, 1),
            (0, 0, 0),
        ];

        let sorted = radix_sort(
            items,
            &[
                Pass {
                    bucket_count: 6,
                    key: &|item: &(u32, u32, u32)| item.2 as usize,
                },
                Pass {
                    bucket_count: 6,
                    key: &|item: &(u32, u32, u32)| item.1 as usize,
                },
                Pass {
                    bucket_count: 6,
                    key: &|item: &(u32, u32, u32)| item.0 as usize,
                },
            ],
            DEFAULT_THRESHOLD,
        );

        let mut expected = vec![
            (0, 0, 0),
            (0, 5, 5),
            (1, 0, 0),
            (1, 2, 1),
            (1, 2, 3),
        ];
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn empty_input() {
        let sorted: Vec<u32> = radix_sort(
            vec![],
            &[Pass {
                bucket_count: 4,
                key: &|item: &u32| *item as usize,
            }],
            DEFAULT_THRESHOLD,
        );
        assert!(sorted.is_empty());
    }

    #[test]
    fn falls_back_to_btree_buckets_above_threshold() {
        let items = vec![(5u32, 0u32), (1, 1), (5, 2), (1, 3)];

        let sorted = radix_sort(
            items,
            &[Pass {
                bucket_count: 10,
                key: &|item: &(u32, u32)| item.0 as usize,
            }],
            1,
        );

        assert_eq!(sorted, vec![(1, 1), (1, 3), (5, 0), (5, 2)]);
    }
}
