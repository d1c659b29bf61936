//! Input classification: the gates that pick a sorting tier.
//!
//! The dispatcher evaluates the gates in a fixed order and the first one that matches wins:
//!
//! 1. [`is_small`]: short inputs go to the comparison sort.
//! 2. [`is_pattern_sorted`]: inputs that look sorted or reversed go to the comparison sort,
//!    which is close to linear on them.
//! 3. [`detect_dense_range`]: integral inputs whose value range is at most `2n` go to counting
//!    sort.
//! 4. Everything else is [`Tier::Sparse`].
//!
//! The gates read values through an index accessor, so the same code classifies a numeric slice
//! and records whose keys are extracted on demand.

use crate::core::{DENSE_RANGE_FACTOR, DENSITY_SAMPLES, PATTERN_MIN_LEN, SMALL_THRESHOLD};
use crate::core::{SortKey, key_span};

/// The sorting tier chosen for an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier<K> {
    /// Fewer than [`SMALL_THRESHOLD`] elements.
    Small,
    /// The pattern probe found three monotonic runs.
    Patterned,
    /// Every value lies in `[min, max]` and the range is dense enough for counting sort.
    Dense { min: K, max: K },
    /// No cheaper tier applies: radix sort for numeric slices, stable comparison sort for records.
    Sparse,
}

/// Classifies a numeric slice without modifying it.
///
/// Floating-point slices never classify as [`Tier::Dense`].
///
/// # Examples
///
/// ```
/// use tieredsort::{classify, Tier};
///
/// let small = vec![3u32, 1, 2];
/// assert_eq!(classify(&small), Tier::Small);
///
/// let descending: Vec<i32> = (0..1000).rev().collect();
/// assert_eq!(classify(&descending), Tier::Patterned);
/// ```
pub fn classify<T: SortKey>(data: &[T]) -> Tier<T> {
    classify_by(data.len(), T::INTEGRAL, |i| data[i])
}

/// Runs the gate sequence over `len` values read through `key_at`.
pub(crate) fn classify_by<K: SortKey>(
    len: usize,
    dense_eligible: bool,
    mut key_at: impl FnMut(usize) -> K,
) -> Tier<K> {
    if is_small(len) {
        return Tier::Small;
    }

    if is_pattern_sorted(len, &mut key_at) {
        return Tier::Patterned;
    }

    if dense_eligible {
        if let Some((min, max)) = detect_dense_range(len, &mut key_at) {
            return Tier::Dense { min, max };
        }
    }

    Tier::Sparse
}

/// Tier 1 gate.
#[inline]
pub fn is_small(len: usize) -> bool {
    len < SMALL_THRESHOLD
}

/// Tier 2 gate: probes three 4-element runs (head, middle, tail).
///
/// Returns `true` when every run is non-decreasing or non-increasing. Each run may go in its own
/// direction. Inputs shorter than [`PATTERN_MIN_LEN`] always return `true`. At most 12
/// comparisons and 12 key reads are made, whatever `len` is.
///
/// A false positive only sends the input to the comparison sort, which still sorts it.
///
/// ```
/// use tieredsort::classify::is_pattern_sorted;
///
/// let data = [1, 2, 3, 4, 9, 5, 7, 8];
/// assert!(!is_pattern_sorted(data.len(), |i| data[i]));
/// ```
pub fn is_pattern_sorted<K: PartialOrd>(len: usize, mut key_at: impl FnMut(usize) -> K) -> bool {
    if len < PATTERN_MIN_LEN {
        return true;
    }

    let mid = len / 2;
    [0, mid - 1, len - 4]
        .into_iter()
        .all(|start| is_monotonic_run(&mut key_at, start))
}

#[inline(always)]
fn is_monotonic_run<K: PartialOrd>(key_at: &mut impl FnMut(usize) -> K, start: usize) -> bool {
    let a = key_at(start);
    let b = key_at(start + 1);
    let c = key_at(start + 2);
    let d = key_at(start + 3);

    let ascending = a <= b && b <= c && c <= d;
    ascending || (a >= b && b >= c && c >= d)
}

/// Tier 3 gate: finds `[min, max]` when the value range is dense.
///
/// 1. Samples up to [`DENSITY_SAMPLES`] evenly strided values. If their range already exceeds
///    `len`, gives up without scanning the rest.
/// 2. Otherwise scans every value for the exact bounds and accepts when the range is at most
///    `DENSE_RANGE_FACTOR * len`.
///
/// The range is measured on the order-preserving keys (see [`key_span`]), so full-width 64-bit
/// inputs cannot overflow the subtraction.
///
/// ```
/// use tieredsort::classify::detect_dense_range;
///
/// let data = [7u64, 3, 5, 4, 6];
/// assert_eq!(detect_dense_range(data.len(), |i| data[i]), Some((3, 7)));
///
/// let wide = [0u64, u64::MAX, 1, 2];
/// assert_eq!(detect_dense_range(wide.len(), |i| wide[i]), None);
/// ```
pub fn detect_dense_range<K: SortKey>(
    len: usize,
    mut key_at: impl FnMut(usize) -> K,
) -> Option<(K, K)> {
    if len == 0 {
        return None;
    }

    let first = key_at(0);
    let (mut min, mut max) = (first, first);

    let stride = (len / DENSITY_SAMPLES).max(1);
    (0..len)
        .step_by(stride)
        .take(DENSITY_SAMPLES)
        .for_each(|i| widen(&mut min, &mut max, key_at(i)));

    if key_span(min, max) > len as u64 {
        return None;
    }

    (0..len).for_each(|i| widen(&mut min, &mut max, key_at(i)));

    let limit = (len as u64).saturating_mul(DENSE_RANGE_FACTOR as u64);
    (key_span(min, max) <= limit).then_some((min, max))
}

#[inline(always)]
fn widen<K: PartialOrd + Copy>(min: &mut K, max: &mut K, value: K) {
    if value < *min {
        *min = value;
    }
    if value > *max {
        *max = value;
    }
}
