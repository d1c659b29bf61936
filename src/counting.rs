//! Counting sort over a verified dense range (tier 3).
//!
//! Both kernels require every element to lie in `[min, max]`, which
//! [`detect_dense_range`](crate::classify::detect_dense_range) guarantees. Bucket indices are
//! computed on the order-preserving keys, so the arithmetic is the same for every width.

use crate::core::{RadixBits, SortKey, key_span};

/// Sorts `data` by tallying each value and regenerating the output in ascending order.
///
/// Runs in `O(n + r)` where `r = max - min + 1`. Equal values are indistinguishable, so no
/// order among them is kept.
///
/// # Panics
///
/// Panics if an element lies outside `[min, max]`.
pub fn counting_sort<T: SortKey>(data: &mut [T], min: T, max: T) {
    let base = min.to_key();
    let mut counts = vec![0usize; bucket_count(min, max)];

    data.iter().for_each(|&v| counts[bucket_of(v, base)] += 1);

    let mut out = 0;
    for (offset, &count) in counts.iter().enumerate() {
        if count > 0 {
            data[out..out + count].fill(T::from_key(base.advance(offset)));
            out += count;
        }
    }
}

/// Sorts `data` stably through `buffer`.
///
/// Counts are turned into bucket end offsets, then the source is walked back to front so equal
/// values land in their original relative order. The result is copied back into `data`.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `data` or an element lies outside `[min, max]`.
pub fn counting_sort_stable<T: SortKey>(data: &mut [T], buffer: &mut [T], min: T, max: T) {
    let n = data.len();
    let buffer = &mut buffer[..n];
    let base = min.to_key();
    let mut counts = vec![0usize; bucket_count(min, max)];

    data.iter().for_each(|&v| counts[bucket_of(v, base)] += 1);
    accumulate_ends(&mut counts);

    for &v in data.iter().rev() {
        let bucket = bucket_of(v, base);
        counts[bucket] -= 1;
        buffer[counts[bucket]] = v;
    }

    data.copy_from_slice(buffer);
}

/// Number of buckets needed for `[min, max]`.
#[inline]
pub(crate) fn bucket_count<K: SortKey>(min: K, max: K) -> usize {
    let span = key_span(min, max);
    debug_assert!(span <= usize::MAX as u64, "dense range exceeds address space");
    span as usize
}

/// Bucket index of `value` relative to the key of the range minimum.
#[inline(always)]
pub(crate) fn bucket_of<K: SortKey>(value: K, base: K::Bits) -> usize {
    value.to_key().distance(base) as usize
}

/// Turns per-bucket counts into exclusive end offsets (inclusive prefix sum).
#[inline]
pub(crate) fn accumulate_ends(counts: &mut [usize]) {
    let mut sum = 0;
    counts.iter_mut().for_each(|count| {
        sum += *count;
        *count = sum;
    });
}
