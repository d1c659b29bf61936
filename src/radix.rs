//! LSD radix sort over order-preserving keys (tier 4).
//!
//! The slice is reinterpreted as its unsigned keys with [`bytemuck`], transformed in place, sorted
//! 8 bits at a time from the least significant digit, and transformed back.
//!
//! Each pass scatters back to front into bucket end offsets, so every pass is stable and so is the
//! whole kernel. Passes ping-pong between the data and the scratch buffer.

use crate::core::{RADIX_BUCKETS, RadixBits, SortKey};
use crate::counting::accumulate_ends;
use cuneiform::cuneiform;

// Cache-aligned digit histogram.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts `data` stably, using `buffer` as the ping-pong destination.
///
/// 4 passes for 32-bit types, 8 for 64-bit types. A pass whose digit is the same for every
/// element is skipped.
///
/// # Panics
///
/// Panics if `buffer` is shorter than `data`.
///
/// # Examples
///
/// ```
/// use tieredsort::radix::radix_sort;
///
/// let mut data = vec![3.5f32, -1.0, 0.0, -7.25, 2.0];
/// let mut buffer = vec![0.0f32; data.len()];
/// radix_sort(&mut data, &mut buffer);
/// assert_eq!(data, vec![-7.25, -1.0, 0.0, 2.0, 3.5]);
/// ```
pub fn radix_sort<T: SortKey>(data: &mut [T], buffer: &mut [T]) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let keys: &mut [T::Bits] = bytemuck::cast_slice_mut(data);
    let scratch: &mut [T::Bits] = bytemuck::cast_slice_mut(&mut buffer[..n]);

    keys.iter_mut().for_each(|k| *k = T::encode(*k));
    radix_sort_keys(keys, scratch);
    keys.iter_mut().for_each(|k| *k = T::decode(*k));
}

/// Sorts unsigned keys in place, using `scratch` as the ping-pong destination.
///
/// After the last pass the sorted keys are copied back into `keys` if they ended up in
/// `scratch`, so the result is always in `keys`.
///
/// # Panics
///
/// Panics if `scratch` is shorter than `keys`.
pub fn radix_sort_keys<B: RadixBits>(keys: &mut [B], scratch: &mut [B]) {
    let n = keys.len();
    let mut src: &mut [B] = keys;
    let mut dst: &mut [B] = &mut scratch[..n];
    let mut in_scratch = false;

    for pass in 0..B::PASSES {
        let mut counts = RadixCounts {
            data: [0; RADIX_BUCKETS],
        };
        let counts = &mut counts.data;

        src.iter().for_each(|k| counts[k.digit(pass)] += 1);

        // One occupied bucket: the pass would not move anything.
        if counts.iter().any(|&c| c == n) {
            continue;
        }

        accumulate_ends(counts);

        for &k in src.iter().rev() {
            let digit = k.digit(pass);
            counts[digit] -= 1;
            dst[counts[digit]] = k;
        }

        std::mem::swap(&mut src, &mut dst);
        in_scratch = !in_scratch;
    }

    // `dst` is the caller's slice again when the result sits in scratch.
    if in_scratch {
        dst.copy_from_slice(src);
    }
}
