//! Adaptive dispatch over the sorting tiers.
//!
//! Every entry point classifies the input with [`classify`] and runs the kernel for the first
//! matching tier:
//!
//! | Tier | Condition | Unstable | Stable |
//! |------|-----------|----------|--------|
//! | 1 | `n < 256` | `sort_unstable_by` | `sort_by` |
//! | 2 | head, middle and tail runs monotonic | `sort_unstable_by` | `sort_by` |
//! | 3 | integral and range `<= 2n` | [`counting_sort`] | [`counting_sort_stable`] |
//! | 4 | otherwise | [`radix_sort`] | [`radix_sort`] |
//!
//! The comparison sorts order by [`SortKey::key_cmp`], which agrees with the key order used by
//! the other tiers, so the output does not depend on the tier taken.
//!
//! A scratch buffer is only allocated when the chosen kernel needs one (stable counting sort and
//! radix sort) and the caller did not pass one.

use crate::classify::{Tier, classify};
use crate::core::SortKey;
use crate::counting::{counting_sort, counting_sort_stable};
use crate::radix::radix_sort;
use bytemuck::Zeroable;
use log::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stability {
    Unstable,
    Stable,
}

/// Sorts a slice of numbers in ascending order.
///
/// Allocates a scratch buffer only if the radix tier is chosen.
///
/// # Examples
///
/// ```
/// use tieredsort::sort;
///
/// let mut data = vec![5, 2, 8, 1, 9, 3, 7, 4, 6];
/// sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort<T: SortKey>(data: &mut [T]) {
    dispatch(data, None, Stability::Unstable);
}

/// Sorts a slice of numbers in ascending order using `buffer` as scratch space.
///
/// Never allocates a scratch buffer. The contents of `buffer` afterwards are unspecified.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `data`.
///
/// # Examples
///
/// ```
/// use tieredsort::sort_with_buffer;
///
/// let mut data: Vec<u64> = (0..1000).map(|i| (i * 7919) % 1013).collect();
/// let mut buffer = vec![0u64; data.len()];
/// sort_with_buffer(&mut data, &mut buffer);
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn sort_with_buffer<T: SortKey>(data: &mut [T], buffer: &mut [T]) {
    check_buffer(data, buffer);
    dispatch(data, Some(buffer), Stability::Unstable);
}

/// Sorts a slice of numbers in ascending order, keeping equal elements in their original order.
///
/// For plain numbers the difference from [`sort`] cannot be observed. Allocates a scratch buffer
/// only if the stable counting or radix tier is chosen.
///
/// ```
/// use tieredsort::stable_sort;
///
/// let mut data = vec![2.5f64, -1.0, 2.5, 0.0];
/// stable_sort(&mut data);
/// assert_eq!(data, vec![-1.0, 0.0, 2.5, 2.5]);
/// ```
pub fn stable_sort<T: SortKey>(data: &mut [T]) {
    dispatch(data, None, Stability::Stable);
}

/// Stable variant of [`sort_with_buffer`].
///
/// # Panics
///
/// Panics if `buffer` is shorter than `data`.
pub fn stable_sort_with_buffer<T: SortKey>(data: &mut [T], buffer: &mut [T]) {
    check_buffer(data, buffer);
    dispatch(data, Some(buffer), Stability::Stable);
}

fn check_buffer<T>(data: &[T], buffer: &[T]) {
    assert!(
        buffer.len() >= data.len(),
        "scratch buffer too small: {} < {}",
        buffer.len(),
        data.len()
    );
}

fn dispatch<T: SortKey>(data: &mut [T], buffer: Option<&mut [T]>, stability: Stability) {
    if data.len() < 2 {
        return;
    }

    let tier = classify(data);
    trace!(
        "tieredsort: n={} {:?} -> {:?}",
        data.len(),
        stability,
        tier
    );

    match (tier, stability) {
        (Tier::Small | Tier::Patterned, Stability::Unstable) => {
            data.sort_unstable_by(T::key_cmp);
        }
        (Tier::Small | Tier::Patterned, Stability::Stable) => {
            data.sort_by(T::key_cmp);
        }
        (Tier::Dense { min, max }, Stability::Unstable) => {
            counting_sort(data, min, max);
        }
        (Tier::Dense { min, max }, Stability::Stable) => {
            with_scratch(data, buffer, |data, scratch| {
                counting_sort_stable(data, scratch, min, max)
            });
        }
        (Tier::Sparse, _) => {
            with_scratch(data, buffer, radix_sort);
        }
    }
}

/// Runs `kernel` with the caller's buffer, or with a buffer owned by this call.
fn with_scratch<T: SortKey>(
    data: &mut [T],
    buffer: Option<&mut [T]>,
    kernel: impl FnOnce(&mut [T], &mut [T]),
) {
    match buffer {
        Some(buffer) => kernel(data, buffer),
        None => {
            let mut scratch = vec![T::zeroed(); data.len()];
            kernel(data, &mut scratch);
        }
    }
}
